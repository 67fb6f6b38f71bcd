// src/time_ctrl/mod.rs
//! Контроль времени стола: окно ставок и пауза после расчёта.
//!
//! Движок сам времени не читает: внешний таймер раз в секунду
//! сообщает, сколько прошло (`TableSession::tick`).

pub mod clock;
pub mod time_rules;

pub use clock::{ClockState, RoundClock};
pub use time_rules::RoundTimings;
