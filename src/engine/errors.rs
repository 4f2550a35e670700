use crate::domain::{Chips, ParticipantId, RoundPhase};

use thiserror::Error;

/// Ошибки игрового движка.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректная ставка: {0:?}")]
    InvalidBetAmount(String),

    #[error("Недостаточно карт в колоде: нужно {required}, есть {available}")]
    InsufficientCards { required: usize, available: usize },

    #[error("У участника {participant_id} баланс {balance}, ставка {amount} недоступна")]
    InsufficientBalance {
        participant_id: ParticipantId,
        balance: Chips,
        amount: Chips,
    },

    #[error("Нужно минимум {min} участника, передано {actual}")]
    NotEnoughParticipants { min: usize, actual: usize },

    #[error("Стартовый баланс не может быть отрицательным: {0}")]
    InvalidStartingBalance(Chips),

    #[error("Недопустимый шаг раунда: ожидалась фаза {expected:?}, текущая {actual:?}")]
    IllegalPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },

    #[error("Переполнение счётчика фишек: {0}")]
    ChipOverflow(&'static str),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
