use serde::{Deserialize, Serialize};

use crate::domain::game::{GameConfig, GameState};
use crate::engine::{new_game, parse_bet_amount, play_round, RandomSource};
use crate::infra::mapping::{map_game_to_dto, map_outcome_to_dto};

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня от UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Начать новую игру (экран открыт).
    NewGame(NewGameCommand),

    /// Нажата кнопка "сделать ставку и сыграть".
    PlayRound(PlayRoundCommand),
}

/// Создание игры.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewGameCommand {
    /// Пусто — взять стандартный состав для варианта.
    #[serde(default)]
    pub participant_names: Vec<String>,
    pub config: GameConfig,
}

/// Раунд со ставкой из текстового поля.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayRoundCommand {
    /// Сырой текст из поля ввода, разбирается здесь.
    pub bet_amount: String,
}

/// Разобрать команду из JSON, который присылает UI.
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    serde_json::from_str(json).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Выполнить команду.
///
/// Состояние игры принадлежит вызывающему: команда получает текущий
/// снимок (если он есть) и возвращает новый. При ошибке вызывающий
/// оставляет прежний снимок.
pub fn execute<R: RandomSource>(
    current: Option<&GameState>,
    command: Command,
    rng: &mut R,
) -> Result<(GameState, CommandResponse), ApiError> {
    match command {
        Command::NewGame(cmd) => {
            let names = if cmd.participant_names.is_empty() {
                cmd.config.default_names()
            } else {
                cmd.participant_names
            };
            let state = new_game(names, cmd.config)?;
            let view = map_game_to_dto(&state);
            Ok((state, CommandResponse::GameCreated(view)))
        }

        Command::PlayRound(cmd) => {
            let state = current.ok_or(ApiError::NoActiveGame)?;
            let bet = parse_bet_amount(&cmd.bet_amount)?;
            let (next, outcome) = play_round(state, bet, rng)?;
            let response = CommandResponse::RoundPlayed {
                outcome: map_outcome_to_dto(&outcome),
                game: map_game_to_dto(&next),
            };
            Ok((next, response))
        }
    }
}
