use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::Winner;

/// Коэффициенты выплат (сколько платим сверх ставки).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Odds {
    pub banker: u64,
    pub player: u64,
    pub tie: u64,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            banker: 1,
            player: 1,
            tie: 8,
        }
    }
}

impl Odds {
    pub fn for_target(&self, target: Winner) -> u64 {
        match target {
            Winner::Banker => self.banker,
            Winner::Player => self.player,
            Winner::Tie => self.tie,
        }
    }
}

/// Лимиты дорог: сколько держим истории и какой высоты big road.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoadLimits {
    /// Сколько последних исходов хранит bead plate.
    pub bead_entries: usize,
    /// Сколько символов хранит каждая производная дорога.
    pub derived_entries: usize,
    /// Сколько ячеек отдаём в плоском представлении big road.
    pub big_road_cells: usize,
    /// Сколько колонок big road держим (лишние обрезаются слева).
    pub max_columns: usize,
    /// Высота big road (классика — 6 рядов).
    pub max_rows: u8,
}

impl Default for RoadLimits {
    fn default() -> Self {
        Self {
            bead_entries: 240,
            derived_entries: 240,
            big_road_cells: 240,
            max_columns: 80,
            max_rows: 6,
        }
    }
}

/// Конфиг стола. Читается один раз при старте сессии, дальше только чтение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Сколько колод в шузе.
    pub decks: u8,
    pub min_bet: Chips,
    pub max_bet: Chips,
    /// Фишка, выбранная по умолчанию.
    pub default_chip: Chips,
    /// Номиналы фишек, доступные игроку.
    pub chips: Vec<Chips>,
    pub odds: Odds,
    /// Длительность окна ставок (сек).
    pub betting_secs: u32,
    /// Сколько показываем результат перед новым раундом (сек).
    pub settle_display_secs: u32,
    pub roads: RoadLimits,
    /// Сколько записей истории раундов хранит сессия.
    pub history_records: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            decks: 6,
            min_bet: Chips(10),
            max_bet: Chips(10_000),
            default_chip: Chips(100),
            chips: [10, 50, 100, 500, 1_000, 5_000, 10_000]
                .into_iter()
                .map(Chips)
                .collect(),
            odds: Odds::default(),
            betting_secs: 15,
            settle_display_secs: 4,
            roads: RoadLimits::default(),
            history_records: 100,
        }
    }
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableConfigError {
    #[error("В шузе должна быть хотя бы одна колода")]
    NoDecks,

    #[error("Минимальная ставка {min} больше максимальной {max}")]
    InvalidLimits { min: Chips, max: Chips },

    #[error("Минимальная ставка должна быть больше нуля")]
    ZeroMinBet,

    #[error("Фишка по умолчанию {0} не входит в список номиналов")]
    UnknownDefaultChip(Chips),

    #[error("Высота big road должна быть больше нуля")]
    ZeroRows,

    #[error("Лимит дороги `{0}` должен быть больше нуля")]
    ZeroRoadLimit(&'static str),
}

impl TableConfig {
    /// Проверка инвариантов конфига.
    pub fn validate(&self) -> Result<(), TableConfigError> {
        if self.decks == 0 {
            return Err(TableConfigError::NoDecks);
        }
        if self.min_bet.is_zero() {
            return Err(TableConfigError::ZeroMinBet);
        }
        if self.min_bet > self.max_bet {
            return Err(TableConfigError::InvalidLimits {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        if !self.chips.is_empty() && !self.chips.contains(&self.default_chip) {
            return Err(TableConfigError::UnknownDefaultChip(self.default_chip));
        }
        if self.roads.max_rows == 0 {
            return Err(TableConfigError::ZeroRows);
        }
        if self.roads.bead_entries == 0 {
            return Err(TableConfigError::ZeroRoadLimit("bead_entries"));
        }
        if self.roads.derived_entries == 0 {
            return Err(TableConfigError::ZeroRoadLimit("derived_entries"));
        }
        if self.roads.big_road_cells == 0 {
            return Err(TableConfigError::ZeroRoadLimit("big_road_cells"));
        }
        if self.roads.max_columns == 0 {
            return Err(TableConfigError::ZeroRoadLimit("max_columns"));
        }
        Ok(())
    }

    /// Зажать сумму в `[min_bet, max_bet]`. При перепутанных лимитах не паникует:
    /// побеждает `max_bet`.
    pub fn clamp_bet(&self, amount: Chips) -> Chips {
        amount.max(self.min_bet).min(self.max_bet)
    }
}
