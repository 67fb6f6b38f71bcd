//! Инфраструктурный слой вокруг движка баккара:
//! - RNG-реализации для движка;
//! - внешний баланс игрока (леджер) и fire-and-forget синхронизация;
//! - загрузка конфига стола.

pub mod config;
pub mod ledger;
pub mod rng;

pub use config::{load_table_config, parse_table_config, ConfigError};
pub use ledger::{BalanceLedger, BalancePayload, BalanceSync, InMemoryLedger, LedgerError};
pub use rng::*;
