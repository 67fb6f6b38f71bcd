use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::bets::BetSet;
use crate::domain::chips::Chips;
use crate::domain::hand::{RoundOutcome, Winner};
use crate::domain::RoundId;

/// Запись истории раундов (то, что видит игрок в списке прошлых раундов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round_id: RoundId,
    /// Например `"banker: 100, tie: 10"`.
    pub bets_description: String,
    pub winner: Winner,
    pub net_change: i64,
}

/// История раундов: новые сверху, длина ограничена.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    records: VecDeque<RoundRecord>,
    limit: usize,
}

impl RoundHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push_front(record);
        self.records.truncate(self.limit);
    }

    /// Записи от новых к старым.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&RoundRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Что уходит наружу после расчёта раунда (для внешней истории/баланса).
/// Доставка не подтверждается, ошибка доставки не фатальна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundBroadcast {
    #[serde(rename = "round")]
    pub round_id: RoundId,
    pub bets: BetSet,
    pub outcome: RoundOutcome,
    #[serde(rename = "net")]
    pub net_change: i64,
    pub balance: Chips,
}

/// Тип события стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum TableEventKind {
    /// Открыто окно ставок нового раунда.
    BettingOpened { round_id: RoundId, countdown_secs: u32 },

    /// Отсчёт окна ставок.
    CountdownTick { remaining_secs: u32 },

    /// Время вышло, а ставок нет — отсчёт начат заново.
    CountdownRestarted { countdown_secs: u32 },

    /// Принята ставка.
    BetPlaced { target: Winner, amount: Chips, balance: Chips },

    /// Ставки сняты, сумма возвращена.
    BetsCleared { refunded: Chips, balance: Chips },

    /// Повторены ставки прошлого раунда.
    Rebet { bets: BetSet, balance: Chips },

    /// Ставки удвоены.
    Doubled { bets: BetSet, balance: Chips },

    /// Выбрана фишка.
    ChipSelected { chip: Chips },

    /// Раунд сдан.
    RoundDealt { round_id: RoundId, outcome: RoundOutcome },

    /// Раунд рассчитан: баланс обновлён, дороги обновлены.
    RoundSettled(RoundBroadcast),

    /// Сессия стола закрыта.
    SessionClosed { balance: Chips },
}

/// Событие стола с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableEvent {
    pub index: u64,
    pub kind: TableEventKind,
}
