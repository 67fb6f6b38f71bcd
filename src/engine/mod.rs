//! Движок баккара: шуз, сдача, выплаты, дороги, жизненный цикл раунда.
//!
//! Высокоуровневый объект: `TableSession`
//! Основные операции:
//!   - `place_bet` / `clear_bets` / `rebet` / `double_bets` – окно ставок
//!   - `deal` – сдать раунд и сразу рассчитать его
//!   - `tick` – протекание времени (обратный отсчёт, пауза после расчёта)

pub mod dealer;
pub mod errors;
pub mod game_loop;
pub mod payout;
pub mod roadmap;
pub mod round_history;
pub mod shoe;
pub mod validation;

pub use dealer::deal_round;
pub use errors::EngineError;
pub use game_loop::{Phase, SettledRound, TableSession, TickOutcome};
pub use payout::{calculate_payout, settle_bets, Payout};
pub use roadmap::{
    BigRoadCell, BigRoadColumn, BigRoadNode, BigRoadPosition, DerivedColor, DerivedRoad,
    RoadSummary, RoadSymbol, RoadmapState,
};
pub use round_history::{RoundBroadcast, RoundHistory, RoundRecord, TableEvent, TableEventKind};
pub use shoe::Shoe;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерное число в диапазоне `[0, upper)`. `upper` > 0.
    fn next_below(&mut self, upper: usize) -> usize;

    /// Перемешать срез на месте.
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
