//! Внешний API движка для слоя отображения.
//!
//! Здесь описываются:
//! - команды (commands.rs) — новая игра и раунд со ставкой из поля ввода;
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — готовые для экрана структуры (имена картинок и т.п.);
//! - ошибки (errors.rs) — то, что видит пользователь.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
