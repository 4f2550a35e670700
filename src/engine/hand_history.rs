use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::HandCategory;
use crate::domain::{ParticipantId, RoundId};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Раунд начался.
    RoundStarted { round_id: RoundId, bet_amount: Chips },

    /// Ставка списана.
    BetPlaced {
        participant_id: ParticipantId,
        amount: Chips,
        balance_after: Chips,
        pot_after: Chips,
    },

    /// Ставка пропущена (не хватило фишек).
    BetSkipped {
        participant_id: ParticipantId,
        balance: Chips,
    },

    /// Участник получил карты.
    CardsDealt {
        participant_id: ParticipantId,
        cards: Vec<Card>,
    },

    /// Рука оценена (только Showdown).
    HandEvaluated {
        participant_id: ParticipantId,
        category: HandCategory,
    },

    /// Выплата банка.
    PotAwarded {
        participant_id: ParticipantId,
        amount: Chips,
    },

    /// Раунд завершён.
    RoundFinished { round_id: RoundId },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn kinds(&self) -> impl Iterator<Item = &RoundEventKind> {
        self.events.iter().map(|e| &e.kind)
    }
}
