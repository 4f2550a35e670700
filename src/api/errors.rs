use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// В поле ставки не положительное целое число.
    InvalidBetAmount(String),

    /// Раунд запрошен до создания игры.
    NoActiveGame,

    /// Ошибка движка (раздача, состав игры).
    EngineError(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl ApiError {
    /// Текст для метки на экране.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::InvalidBetAmount(_) => "Please enter a valid bet amount".to_string(),
            ApiError::NoActiveGame => "Start a new game first".to_string(),
            ApiError::BadRequest(msg)
            | ApiError::EngineError(msg)
            | ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidBetAmount(input) => ApiError::InvalidBetAmount(input),
            EngineError::Internal(msg) => ApiError::Internal(msg.to_string()),
            other => ApiError::EngineError(other.to_string()),
        }
    }
}
