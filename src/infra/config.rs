use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::game::GameConfig;

/// Ошибки загрузки конфига игры.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Стартовый баланс не может быть отрицательным: {0}")]
    NegativeStartingBalance(i64),
}

/// Разобрать конфиг из JSON-строки.
///
/// ```json
/// { "variant": "Showdown", "starting_balance": 100, "betting_policy": "RejectIfInsufficient" }
/// ```
pub fn parse_config(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    if config.starting_balance.is_negative() {
        return Err(ConfigError::NegativeStartingBalance(config.starting_balance.0));
    }
    Ok(config)
}

/// Прочитать конфиг из файла.
pub fn load_config(path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&json)
}
