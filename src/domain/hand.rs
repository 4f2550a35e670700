use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::ParticipantId;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    BetsCollected,
    Dealt,
    Resolved,
}

/// Грубая категория силы руки в Showdown.
///
/// Флеш, стрит и стрит-флеш сворачиваются в `ThreeOfAKind`,
/// сами признаки доступны в `eval::HandEvaluation`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    Pair = 2,
    ThreeOfAKind = 3,
}

/// Что стало со ставкой участника в этом раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetOutcome {
    /// Ставка списана и ушла в банк.
    Placed(Chips),
    /// Не хватило фишек — ставка пропущена, участник всё равно получает карты.
    Skipped,
}

impl BetOutcome {
    pub fn contributed(&self) -> Chips {
        match self {
            BetOutcome::Placed(amount) => *amount,
            BetOutcome::Skipped => Chips::ZERO,
        }
    }
}

/// Результат конкретного участника в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantResult {
    pub participant_id: ParticipantId,
    pub name: String,
    pub bet: BetOutcome,
    pub cards: Vec<Card>,
    /// Только для Showdown.
    pub category: Option<HandCategory>,
    pub balance_after: Chips,
    pub is_winner: bool,
}
