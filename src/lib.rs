//! Движок раундов казуальной карточной игры на фишки.
//!
//! Два варианта: LuckyDraw (по одной карте, старшая побеждает) и
//! Showdown (по три карты, категория руки + старшая карта). UI только
//! рисует снимок состояния и передаёт ставку; вся логика здесь.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{GameConfig, GameState, GameVariant};
pub use engine::{new_game, play_round, EngineError, RoundOutcome};
