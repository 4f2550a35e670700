//! Оценка рук и выбор победителя.
//!
//! Основные функции:
//!   `evaluate_hand(hand) -> HandEvaluation` — трёхкарточная рука (Showdown)
//!   `determine_winner(a, b) -> HeadsUp`
//!   `high_card_winner(cards)` — одна карта на участника (LuckyDraw)

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{
    determine_winner, evaluate_hand, high_card_winner, showdown_winner, HeadsUp, ShowdownHand,
    SHOWDOWN_HAND_SIZE,
};
pub use hand_rank::{describe_hand, HandEvaluation};
