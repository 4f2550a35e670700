use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandCategory;

/// Полная оценка трёхкарточной руки.
///
/// `category` — то, что участвует в сравнении. Флаги флеша/стрита
/// оставлены для отображения: в сравнении они уже свёрнуты в
/// `ThreeOfAKind`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub category: HandCategory,
    pub is_flush: bool,
    pub is_straight: bool,
    pub high_card: Rank,
}

impl HandEvaluation {
    pub fn is_straight_flush(&self) -> bool {
        self.is_flush && self.is_straight
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High card",
            HandCategory::Pair => "Pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
        };
        write!(f, "{s}")
    }
}

/// Человеческое описание руки, с пометкой, за счёт чего получена категория.
pub fn describe_hand(eval: &HandEvaluation) -> String {
    let via = if eval.is_straight_flush() {
        Some("straight flush")
    } else if eval.is_flush {
        Some("flush")
    } else if eval.is_straight {
        Some("straight")
    } else {
        None
    };

    match via {
        Some(v) => format!("{} ({v}), high {}", eval.category, eval.high_card),
        None => format!("{}, high {}", eval.category, eval.high_card),
    }
}
