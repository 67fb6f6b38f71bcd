//! Движок раунда баккара: шуз, сдача по правилам третьей карты, выплаты,
//! дороги (bead plate / big road / производные) и жизненный цикл стола.
//!
//! Слои:
//! - `domain` — карты, фишки, ставки, конфиг стола;
//! - `eval` — подсчёт очков и правила добора;
//! - `engine` — шуз, дилер, выплаты, дороги, сессия стола;
//! - `time_ctrl` — таймеры окна ставок и показа результата;
//! - `infra` — RNG, внешний баланс, загрузка конфига;
//! - `api` — команды / запросы / DTO для фронта.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;
