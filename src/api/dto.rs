use serde::{Deserialize, Serialize};

use crate::domain::bets::BetSet;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Winner;
use crate::domain::{RoundId, TableId};
use crate::engine::roadmap::{BigRoadCell, RoadSummary};
use crate::engine::SettledRound;

/// DTO итога сдачи: карты и тоталы обеих сторон.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeDto {
    pub player: Vec<Card>,
    pub banker: Vec<Card>,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Winner,
}

/// DTO рассчитанного раунда (окно результата).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettledRoundDto {
    pub round_id: RoundId,
    pub bets: BetSet,
    pub outcome: OutcomeDto,
    pub payout: Chips,
    pub net_change: i64,
    pub balance: Chips,
}

impl From<&SettledRound> for SettledRoundDto {
    fn from(round: &SettledRound) -> Self {
        let outcome = &round.outcome;
        Self {
            round_id: round.round_id,
            bets: round.bets,
            outcome: OutcomeDto {
                player: outcome.player_hand.cards.clone(),
                banker: outcome.banker_hand.cards.clone(),
                player_total: outcome.player_total,
                banker_total: outcome.banker_total,
                winner: outcome.winner,
            },
            payout: round.payout.win_amount,
            net_change: round.payout.net_change,
            balance: round.balance_after,
        }
    }
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub round_id: RoundId,
    /// "betting" / "dealing" / "settling".
    pub phase: String,
    pub timer_secs: u32,
    pub balance: Chips,
    pub bets: BetSet,
    pub total_bet: Chips,
    pub selected_chip: Chips,
    pub chips: Vec<Chips>,
    pub min_bet: Chips,
    pub max_bet: Chips,
    pub can_rebet: bool,
    /// Результат текущего раунда, пока он на экране.
    pub last_round: Option<SettledRoundDto>,
}

/// DTO всех дорог. Символы — буквы: B/P/T для исходов, R/B для производных дорог.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapDto {
    pub bead: Vec<char>,
    pub big: Vec<BigRoadCell>,
    pub big_eye: Vec<char>,
    pub small: Vec<char>,
    pub roach: Vec<char>,
    pub summary: RoadSummary,
}

/// DTO одной строки истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryItemDto {
    pub round_id: RoundId,
    pub bet: String,
    /// "BANKER" / "PLAYER" / "TIE".
    pub result: String,
    pub net: i64,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Вернуть обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раунд сдан и рассчитан.
    RoundSettled {
        table: TableViewDto,
        round: SettledRoundDto,
    },
}
