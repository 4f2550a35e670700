use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandCategory;

use super::hand_rank::HandEvaluation;
use super::lookup_tables::{is_three_card_straight, rank_to_bit, RankMask};

/// Размер руки в Showdown.
pub const SHOWDOWN_HAND_SIZE: usize = 3;

pub type ShowdownHand = [Card; SHOWDOWN_HAND_SIZE];

/// Кто победил в сравнении двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeadsUp {
    First,
    Second,
}

/// Оценка трёхкарточной руки.
///
/// Флеш, стрит и стрит-флеш дают `ThreeOfAKind`. Результат не зависит
/// от порядка карт.
pub fn evaluate_hand(hand: &ShowdownHand) -> HandEvaluation {
    let mut rank_counts = [0u8; 15]; // индексы 0..14, используем 2..14
    let mut rank_mask: RankMask = 0;

    for card in hand.iter() {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);
    let is_straight = is_three_card_straight(rank_mask);
    let max_same = rank_counts.iter().copied().max().unwrap_or(0);

    let category = if is_flush || is_straight || max_same >= 3 {
        HandCategory::ThreeOfAKind
    } else if max_same == 2 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    };

    HandEvaluation {
        category,
        is_flush,
        is_straight,
        high_card: highest_rank(hand),
    }
}

fn highest_rank(hand: &ShowdownHand) -> Rank {
    hand.iter().map(|c| c.rank).max().unwrap_or(Rank::Two)
}

/// Сравнение двух рук.
///
/// Старшая категория побеждает сразу. При равных категориях побеждает
/// строго старшая одиночная карта. Полная ничья отдаётся второй руке.
pub fn determine_winner(a: &ShowdownHand, b: &ShowdownHand) -> HeadsUp {
    let ea = evaluate_hand(a);
    let eb = evaluate_hand(b);

    if ea.category != eb.category {
        return if ea.category > eb.category {
            HeadsUp::First
        } else {
            HeadsUp::Second
        };
    }

    if ea.high_card > eb.high_card {
        HeadsUp::First
    } else {
        HeadsUp::Second
    }
}

/// Победитель Showdown среди любого числа рук (индекс в исходном порядке).
///
/// Левая свёртка `determine_winner`: текущий лидер против следующего
/// места. Полная ничья уходит более позднему месту — как и в схватке
/// один на один. `None` только для пустого списка.
pub fn showdown_winner(hands: &[ShowdownHand]) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (idx, hand) in hands.iter().enumerate() {
        best = match best {
            None => Some(idx),
            Some(b) => match determine_winner(&hands[b], hand) {
                HeadsUp::First => Some(b),
                HeadsUp::Second => Some(idx),
            },
        };
    }

    best
}

/// Победитель LuckyDraw: старший ранг, масть не важна.
///
/// Тай-брейк: при равном ранге побеждает участник, стоящий раньше
/// по порядку.
pub fn high_card_winner(cards: &[Card]) -> Option<usize> {
    let mut best: Option<(usize, Rank)> = None;

    for (idx, card) in cards.iter().enumerate() {
        match best {
            Some((_, r)) if r >= card.rank => {}
            _ => best = Some((idx, card.rank)),
        }
    }

    best.map(|(idx, _)| idx)
}
