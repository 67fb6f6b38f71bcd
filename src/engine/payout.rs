use serde::{Deserialize, Serialize};

use crate::domain::bets::BetSet;
use crate::domain::chips::Chips;
use crate::domain::hand::{RoundOutcome, Winner};
use crate::domain::table::Odds;

/// Результат расчёта ставок за раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    /// Сколько возвращаем игроку на баланс (ставка + выигрыш + push).
    pub win_amount: Chips,
    /// Итог раунда относительно поставленного: `win_amount - total_staked`.
    pub net_change: i64,
}

/// Посчитать выплату по ставкам при известном победителе.
///
/// - выигравшая ставка возвращается с выигрышем: `bet * (1 + odds)`;
/// - при ничьей ставки на banker и player возвращаются (push);
/// - остальное проиграно.
pub fn calculate_payout(bets: &BetSet, winner: Winner, odds: &Odds) -> Payout {
    let mut win_amount = bets
        .get(winner)
        .times(1 + odds.for_target(winner));

    if winner == Winner::Tie {
        win_amount += bets.banker + bets.player;
    }

    Payout {
        win_amount,
        net_change: win_amount.signed_diff(bets.total()),
    }
}

/// То же, но по готовому итогу сдачи.
pub fn settle_bets(bets: &BetSet, outcome: &RoundOutcome, odds: &Odds) -> Payout {
    calculate_payout(bets, outcome.winner, odds)
}
