use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::ParticipantId;

/// Участник игры: имя, баланс и карты последней раздачи.
///
/// Карты назначает движок раунда; участник держит их только
/// до следующей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub balance: Chips,
    /// 0 карт до первой раздачи, 1 в LuckyDraw, 3 в Showdown.
    pub cards: Vec<Card>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>, balance: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            cards: Vec::new(),
        }
    }

    pub fn can_afford(&self, amount: Chips) -> bool {
        self.balance >= amount
    }

    /// Старшая карта на руке. При равных рангах — первая по порядку.
    pub fn best_card(&self) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .fold(None, |best: Option<Card>, c| match best {
                Some(b) if b.rank >= c.rank => Some(b),
                _ => Some(c),
            })
    }
}
