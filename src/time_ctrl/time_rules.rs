// src/time_ctrl/time_rules.rs
//! Тайминг раунда: окно ставок и пауза показа результата.
//!
//! Здесь описываем только "правила", без состояния и без привязки к конкретному столу.

use serde::{Deserialize, Serialize};

use crate::domain::table::TableConfig;

/// Правила тайминга для одного стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundTimings {
    /// Сколько секунд открыто окно ставок.
    pub betting_secs: u32,
    /// Сколько секунд показываем результат перед новым раундом.
    pub settle_display_secs: u32,
}

impl RoundTimings {
    pub const fn new(betting_secs: u32, settle_display_secs: u32) -> Self {
        Self {
            betting_secs,
            settle_display_secs,
        }
    }

    /// Стандартный профиль: 15 сек на ставки, 4 сек на показ.
    pub const fn standard() -> Self {
        Self::new(15, 4)
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.betting_secs, config.settle_display_secs)
    }
}
