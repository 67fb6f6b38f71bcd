//! Подсчёт очков баккара и правила добора.
//!
//! Основные функции:
//!   `hand_total(cards) -> u8`
//!   `classify_winner(player_total, banker_total) -> Winner`
//!   `player_draws` / `banker_draws` — таблица третьей карты

pub mod drawing_rules;
pub mod evaluator;

pub use drawing_rules::{banker_draws, player_draws};
pub use evaluator::{classify_winner, hand_total, is_natural, is_natural_total};
