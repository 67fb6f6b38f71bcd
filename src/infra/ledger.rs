use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::chips::Chips;
use crate::engine::round_history::{RoundBroadcast, TableEvent, TableEventKind};

/// Идентификатор игрока во внешнем хранилище баланса.
pub type PlayerKey = String;

/// Ошибки внешнего хранилища баланса.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Хранилище баланса недоступно: {0}")]
    Unavailable(String),

    #[error("Игрок {0} не найден")]
    UnknownPlayer(PlayerKey),

    #[error("Ошибка сериализации: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

/// То, что уходит во внешнее хранилище: `{ "balance": 1234 }`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalancePayload {
    pub balance: Chips,
}

impl BalancePayload {
    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Абстракция внешнего баланса игрока.
///
/// Движок баланс только читает при открытии сессии и пушит после каждого
/// раунда и при закрытии. Сбой записи не откатывает баланс в памяти.
pub trait BalanceLedger {
    /// Прочитать стартовый баланс.
    fn load_balance(&self, player: &str) -> Result<Chips, LedgerError>;

    /// Записать текущий баланс.
    fn commit_balance(&mut self, player: &str, payload: BalancePayload) -> Result<(), LedgerError>;

    /// Записать рассчитанный раунд во внешнюю историю (опционально).
    fn record_round(&mut self, player: &str, round: &RoundBroadcast) -> Result<(), LedgerError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: HashMap<PlayerKey, Chips>,
    rounds: HashMap<PlayerKey, Vec<RoundBroadcast>>,
    /// Если задано — каждая запись падает с этой ошибкой (имитация сбоя сети).
    fail_writes: Option<String>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, player: &str, balance: Chips) -> Self {
        self.balances.insert(player.to_string(), balance);
        self
    }

    /// Включить/выключить сбой записи.
    pub fn set_fail_writes(&mut self, reason: Option<&str>) {
        self.fail_writes = reason.map(str::to_string);
    }

    pub fn balance_of(&self, player: &str) -> Option<Chips> {
        self.balances.get(player).copied()
    }

    pub fn rounds_of(&self, player: &str) -> &[RoundBroadcast] {
        self.rounds.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    fn check_writable(&self) -> Result<(), LedgerError> {
        match &self.fail_writes {
            Some(reason) => Err(LedgerError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl BalanceLedger for InMemoryLedger {
    fn load_balance(&self, player: &str) -> Result<Chips, LedgerError> {
        self.balance_of(player)
            .ok_or_else(|| LedgerError::UnknownPlayer(player.to_string()))
    }

    fn commit_balance(&mut self, player: &str, payload: BalancePayload) -> Result<(), LedgerError> {
        self.check_writable()?;
        self.balances.insert(player.to_string(), payload.balance);
        Ok(())
    }

    fn record_round(&mut self, player: &str, round: &RoundBroadcast) -> Result<(), LedgerError> {
        self.check_writable()?;
        self.rounds
            .entry(player.to_string())
            .or_default()
            .push(round.clone());
        Ok(())
    }
}

/// Мост "события стола → внешний леджер". Fire-and-forget: ошибки только логируются.
pub struct BalanceSync<L: BalanceLedger> {
    player: PlayerKey,
    ledger: L,
    failed_writes: u64,
}

impl<L: BalanceLedger> BalanceSync<L> {
    pub fn new(player: impl Into<PlayerKey>, ledger: L) -> Self {
        Self {
            player: player.into(),
            ledger,
            failed_writes: 0,
        }
    }

    /// Стартовый баланс. Неизвестный игрок или недоступный леджер — 0.
    pub fn opening_balance(&self) -> Chips {
        match self.ledger.load_balance(&self.player) {
            Ok(balance) => balance,
            Err(err) => {
                warn!(player = %self.player, %err, "opening balance unavailable, starting from zero");
                Chips::ZERO
            }
        }
    }

    /// Обработать события стола: после расчёта раунда и при закрытии пушим баланс.
    pub fn apply_events(&mut self, events: &[TableEvent]) {
        for event in events {
            match &event.kind {
                TableEventKind::RoundSettled(round) => {
                    let result = self.ledger.record_round(&self.player, round);
                    self.log_failure("record_round", result);
                    self.push_balance(round.balance);
                }
                TableEventKind::SessionClosed { balance } => self.push_balance(*balance),
                _ => {}
            }
        }
    }

    /// Записать баланс; сбой — только warn.
    pub fn push_balance(&mut self, balance: Chips) {
        let result = self
            .ledger
            .commit_balance(&self.player, BalancePayload { balance });
        if result.is_ok() {
            debug!(player = %self.player, %balance, "balance committed");
        }
        self.log_failure("commit_balance", result);
    }

    fn log_failure(&mut self, op: &'static str, result: Result<(), LedgerError>) {
        if let Err(err) = result {
            self.failed_writes += 1;
            warn!(player = %self.player, op, %err, "ledger write failed, in-memory state kept");
        }
    }

    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }
}
