//! Игровой движок: ставки, банк, раздача, разыгрывание раунда.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `new_game` – собрать снимок новой игры
//!   - `play_round` – сыграть раунд целиком и получить новый снимок
//!   - `RoundEngine::{collect_bets, deal, resolve, finish}` – то же по шагам

pub mod betting;
pub mod dealer;
pub mod errors;
pub mod hand_history;
pub mod pot;
pub mod round;
pub mod validation;

pub use betting::{collect_bets, place_bet};
pub use dealer::{deal, shuffle, Deal};
pub use errors::EngineError;
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::Pot;
pub use round::{new_game, play_round, RoundEngine, RoundOutcome};
pub use validation::{parse_bet_amount, validate_bet_amount};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
