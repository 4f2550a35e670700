use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::game::GameState;
use crate::domain::ParticipantId;
use crate::infra::mapping::map_game_to_dto;

use super::dto::GameViewDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное состояние экрана.
    GetGame,

    /// Только балансы (по стабильным id).
    GetBalances,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    Balances(Vec<(ParticipantId, Chips)>),
}

pub fn run_query(state: &GameState, query: &Query) -> QueryResponse {
    match query {
        Query::GetGame => QueryResponse::Game(map_game_to_dto(state)),
        Query::GetBalances => QueryResponse::Balances(state.balances()),
    }
}
