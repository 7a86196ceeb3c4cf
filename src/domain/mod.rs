//! Доменная модель бота: карты, колоды, игроки.

pub mod card;
pub mod deck;
pub mod errors;
pub mod player;

/// Внешний идентификатор игрока (id пользователя чат-платформы).
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::*;
pub use player::*;
