//! Доменная модель: карты, колода, фишки, участники, конфиг и снимок игры.

pub mod card;
pub mod chips;
pub mod deck;
pub mod game;
pub mod hand;
pub mod player;

pub type ParticipantId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use game::*;
pub use hand::*;
pub use player::*;
