//! Инфраструктурный слой вокруг движка:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - загрузка конфига;
//! - маппинги domain -> API (в т.ч. карта -> имя картинки).

pub mod config;
pub mod ids;
pub mod mapping;
pub mod rng;

pub use config::*;
pub use ids::*;
pub use mapping::*;
pub use rng::*;
