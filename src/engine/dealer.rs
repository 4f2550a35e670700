use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Результат раздачи: руки по порядку участников и остаток колоды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub remaining: Deck,
}

/// Перемешать колоду (Fisher–Yates внутри `RandomSource`).
/// Исходная колода поглощается, наружу отдаётся новая.
pub fn shuffle<R: RandomSource>(deck: Deck, rng: &mut R) -> Deck {
    let mut cards = deck.cards;
    rng.shuffle(&mut cards);
    Deck::from_cards(cards)
}

/// Раздать по `cards_per_participant` карт каждому участнику.
///
/// Карты берутся с начала колоды блоками: участник 0 получает все
/// свои карты, затем участник 1 и т.д. По кругу не раздаём.
pub fn deal(
    mut deck: Deck,
    participant_count: usize,
    cards_per_participant: usize,
) -> Result<Deal, EngineError> {
    let available = deck.len();
    let required = participant_count
        .checked_mul(cards_per_participant)
        .ok_or(EngineError::InsufficientCards {
            required: usize::MAX,
            available,
        })?;

    if required > available {
        return Err(EngineError::InsufficientCards { required, available });
    }

    let hands = (0..participant_count)
        .map(|_| deck.draw_n(cards_per_participant))
        .collect();

    Ok(Deal {
        hands,
        remaining: deck,
    })
}
