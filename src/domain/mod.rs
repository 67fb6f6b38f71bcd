//! Доменная модель баккара: карты, колоды, фишки, руки, ставки, конфиг стола.

pub mod bets;
pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod table;

// Базовые идентификаторы.
pub type TableId = u64;
pub type RoundId = u64;

// Плоские реэкспорты: crate::domain::Winner, crate::domain::BetSet.
pub use bets::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use table::*;
