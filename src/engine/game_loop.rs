use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::bets::BetSet;
use crate::domain::chips::Chips;
use crate::domain::hand::{RoundOutcome, Winner};
use crate::domain::table::{TableConfig, TableConfigError};
use crate::domain::{RoundId, TableId};
use crate::engine::dealer::deal_round;
use crate::engine::errors::EngineError;
use crate::engine::payout::{settle_bets, Payout};
use crate::engine::roadmap::RoadmapState;
use crate::engine::round_history::{
    RoundBroadcast, RoundHistory, RoundRecord, TableEvent, TableEventKind,
};
use crate::engine::shoe::Shoe;
use crate::engine::validation::{validate_bet, validate_chip, validate_double, validate_rebet};
use crate::engine::RandomSource;
use crate::time_ctrl::{ClockState, RoundClock, RoundTimings};

/// Рассчитанный раунд: что стояло, что выпало, сколько вернулось.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettledRound {
    pub round_id: RoundId,
    pub bets: BetSet,
    pub outcome: RoundOutcome,
    pub payout: Payout,
    pub balance_after: Chips,
}

/// Фаза стола.
///
/// `betting → dealing → settling → betting`. Итог сдачи живёт внутри
/// `Settling`, поэтому расчёт без сдачи просто не выразим.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Betting,
    Dealing,
    Settling(SettledRound),
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Betting => "betting",
            Phase::Dealing => "dealing",
            Phase::Settling(_) => "settling",
        }
    }
}

/// Что произошло за один `tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Таймер не запущен — ничего не делаем.
    Idle,
    /// Идёт окно ставок.
    Countdown { remaining_secs: u32 },
    /// Окно ставок истекло без ставок — отсчёт заново, раунд не тратится.
    CountdownRestarted,
    /// Окно ставок истекло, раунд сдан и рассчитан.
    Dealt(Box<SettledRound>),
    /// Идёт показ результата.
    SettleDisplay { remaining_secs: u32 },
    /// Показ закончился, открыт новый раунд.
    NextRound { round_id: RoundId },
}

/// Сессия одного игрока за столом баккара.
///
/// Владеет балансом, ставками, шузом, дорогами и историей.
/// Все операции синхронные; внешнему миру сессия отдаёт только события (`drain_events`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableSession {
    table_id: TableId,
    config: TableConfig,
    timings: RoundTimings,
    phase: Phase,
    round_id: RoundId,
    balance: Chips,
    bets: BetSet,
    /// Ставки прошлого раунда (для rebet). Живут один раунд.
    previous_bets: Option<BetSet>,
    selected_chip: Chips,
    shoe: Shoe,
    roadmap: RoadmapState,
    history: RoundHistory,
    clock: RoundClock,
    events: Vec<TableEvent>,
    next_event_index: u64,
}

impl TableSession {
    /// Открыть сессию: проверить конфиг, собрать шуз, открыть окно ставок первого раунда.
    pub fn new<R: RandomSource>(
        table_id: TableId,
        config: TableConfig,
        opening_balance: Chips,
        rng: &mut R,
    ) -> Result<Self, TableConfigError> {
        config.validate()?;

        let timings = RoundTimings::from_config(&config);
        let shoe = Shoe::new(config.decks, rng);

        Self::with_shoe(table_id, config, timings, opening_balance, shoe)
    }

    /// То же, но с готовым шузом (реплей, тесты).
    pub fn with_shoe(
        table_id: TableId,
        config: TableConfig,
        timings: RoundTimings,
        opening_balance: Chips,
        shoe: Shoe,
    ) -> Result<Self, TableConfigError> {
        config.validate()?;

        let mut session = Self {
            table_id,
            roadmap: RoadmapState::new(config.roads),
            history: RoundHistory::new(config.history_records),
            selected_chip: config.default_chip,
            config,
            timings,
            phase: Phase::Betting,
            round_id: 1,
            balance: opening_balance,
            bets: BetSet::EMPTY,
            previous_bets: None,
            shoe,
            clock: RoundClock::new(),
            events: Vec::new(),
            next_event_index: 0,
        };

        session.open_betting();
        info!(
            table_id,
            balance = %opening_balance,
            "table session opened"
        );
        Ok(session)
    }

    // ---------- окно ставок ----------

    /// Поставить `amount` на `target`. Сумма зажимается в лимиты стола.
    /// Возвращает фактически списанную сумму.
    pub fn place_bet(&mut self, target: Winner, amount: Chips) -> Result<Chips, EngineError> {
        self.ensure_betting()?;
        let amount = validate_bet(&self.config, self.balance, amount)?;

        self.balance -= amount;
        *self.bets.get_mut(target) += amount;

        debug!(round_id = self.round_id, ?target, %amount, balance = %self.balance, "bet placed");
        self.emit(TableEventKind::BetPlaced {
            target,
            amount,
            balance: self.balance,
        });
        Ok(amount)
    }

    /// Поставить выбранную фишку.
    pub fn place_selected(&mut self, target: Winner) -> Result<Chips, EngineError> {
        self.place_bet(target, self.selected_chip)
    }

    /// Выбрать фишку из номиналов стола.
    pub fn select_chip(&mut self, chip: Chips) -> Result<(), EngineError> {
        validate_chip(&self.config, chip)?;
        self.selected_chip = chip;
        self.emit(TableEventKind::ChipSelected { chip });
        Ok(())
    }

    /// Снять все ставки и вернуть их на баланс.
    pub fn clear_bets(&mut self) -> Result<Chips, EngineError> {
        self.ensure_betting()?;

        let refunded = self.bets.total();
        self.balance += refunded;
        self.bets = BetSet::EMPTY;

        self.emit(TableEventKind::BetsCleared {
            refunded,
            balance: self.balance,
        });
        Ok(refunded)
    }

    /// Повторить ставки прошлого раунда вместо текущих.
    ///
    /// Всё или ничего: если не хватает баланса, ставки и баланс не меняются.
    pub fn rebet(&mut self) -> Result<BetSet, EngineError> {
        self.ensure_betting()?;
        let previous = self.previous_bets.ok_or(EngineError::NoPreviousBets)?;

        self.balance = validate_rebet(self.balance, &self.bets, &previous)?;
        self.bets = previous;

        self.emit(TableEventKind::Rebet {
            bets: previous,
            balance: self.balance,
        });
        Ok(previous)
    }

    /// Удвоить каждую ненулевую ставку. Всё или ничего.
    pub fn double_bets(&mut self) -> Result<BetSet, EngineError> {
        self.ensure_betting()?;

        let extra = validate_double(self.balance, &self.bets)?;
        self.balance -= extra;
        self.bets = self.bets.doubled();

        self.emit(TableEventKind::Doubled {
            bets: self.bets,
            balance: self.balance,
        });
        Ok(self.bets)
    }

    // ---------- сдача и расчёт ----------

    /// Закрыть ставки, сдать раунд и сразу его рассчитать.
    ///
    /// Без ставок — отказ, фаза не меняется и раунд не тратится.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<SettledRound, EngineError> {
        self.ensure_betting()?;
        if self.bets.is_empty() {
            return Err(EngineError::NoBetsPlaced);
        }

        self.clock.stop();
        self.phase = Phase::Dealing;

        let outcome = deal_round(&mut self.shoe, rng);
        info!(
            round_id = self.round_id,
            player = %outcome.player_hand,
            banker = %outcome.banker_hand,
            winner = %outcome.winner,
            "round dealt"
        );
        self.emit(TableEventKind::RoundDealt {
            round_id: self.round_id,
            outcome: outcome.clone(),
        });

        Ok(self.settle(outcome))
    }

    fn settle(&mut self, outcome: RoundOutcome) -> SettledRound {
        debug_assert!(matches!(self.phase, Phase::Dealing));

        let payout = settle_bets(&self.bets, &outcome, &self.config.odds);
        self.balance += payout.win_amount;
        self.roadmap.record(outcome.winner);
        self.history.push(RoundRecord {
            round_id: self.round_id,
            bets_description: self.bets.describe(),
            winner: outcome.winner,
            net_change: payout.net_change,
        });

        let settled = SettledRound {
            round_id: self.round_id,
            bets: self.bets,
            outcome,
            payout,
            balance_after: self.balance,
        };

        info!(
            round_id = settled.round_id,
            win = %payout.win_amount,
            net = payout.net_change,
            balance = %self.balance,
            "round settled"
        );
        self.emit(TableEventKind::RoundSettled(RoundBroadcast {
            round_id: settled.round_id,
            bets: settled.bets,
            outcome: settled.outcome.clone(),
            net_change: payout.net_change,
            balance: self.balance,
        }));

        self.clock.start(self.timings.settle_display_secs);
        self.phase = Phase::Settling(settled.clone());
        settled
    }

    /// Протекание времени (внешний таймер, обычно раз в секунду).
    pub fn tick<R: RandomSource>(&mut self, elapsed_secs: u32, rng: &mut R) -> TickOutcome {
        match self.phase {
            Phase::Betting => match self.clock.elapse(elapsed_secs) {
                ClockState::Idle => TickOutcome::Idle,
                ClockState::Running { remaining_secs } => {
                    self.emit(TableEventKind::CountdownTick { remaining_secs });
                    TickOutcome::Countdown { remaining_secs }
                }
                ClockState::Expired if self.bets.is_empty() => {
                    self.clock.start(self.timings.betting_secs);
                    self.emit(TableEventKind::CountdownRestarted {
                        countdown_secs: self.timings.betting_secs,
                    });
                    TickOutcome::CountdownRestarted
                }
                ClockState::Expired => match self.deal(rng) {
                    Ok(settled) => TickOutcome::Dealt(Box::new(settled)),
                    Err(err) => {
                        warn!(%err, "countdown expired but deal was refused");
                        TickOutcome::Idle
                    }
                },
            },
            Phase::Dealing => TickOutcome::Idle,
            Phase::Settling(_) => match self.clock.elapse(elapsed_secs) {
                ClockState::Idle => TickOutcome::Idle,
                ClockState::Running { remaining_secs } => TickOutcome::SettleDisplay { remaining_secs },
                ClockState::Expired => TickOutcome::NextRound {
                    round_id: self.start_next_round(),
                },
            },
        }
    }

    /// Закрыть сессию: остановить таймер, вернуть несданные ставки.
    /// Возвращает итоговый баланс и последние события.
    pub fn close(mut self) -> (Chips, Vec<TableEvent>) {
        self.clock.stop();
        if matches!(self.phase, Phase::Betting) && !self.bets.is_empty() {
            self.balance += self.bets.total();
            self.bets = BetSet::EMPTY;
        }

        info!(table_id = self.table_id, balance = %self.balance, "table session closed");
        self.emit(TableEventKind::SessionClosed {
            balance: self.balance,
        });
        (self.balance, self.drain_events())
    }

    fn start_next_round(&mut self) -> RoundId {
        self.previous_bets = Some(std::mem::take(&mut self.bets));
        self.round_id += 1;
        self.open_betting();
        self.round_id
    }

    fn open_betting(&mut self) {
        self.phase = Phase::Betting;
        self.clock.start(self.timings.betting_secs);
        self.emit(TableEventKind::BettingOpened {
            round_id: self.round_id,
            countdown_secs: self.timings.betting_secs,
        });
    }

    fn ensure_betting(&self) -> Result<(), EngineError> {
        if matches!(self.phase, Phase::Betting) {
            Ok(())
        } else {
            Err(EngineError::BettingClosed)
        }
    }

    fn emit(&mut self, kind: TableEventKind) {
        let index = self.next_event_index;
        self.next_event_index += 1;
        self.events.push(TableEvent { index, kind });
    }

    // ---------- чтение ----------

    /// Забрать накопленные события (для слоя отображения / внешнего леджера).
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn timings(&self) -> RoundTimings {
        self.timings
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn bets(&self) -> &BetSet {
        &self.bets
    }

    pub fn total_staked(&self) -> Chips {
        self.bets.total()
    }

    pub fn previous_bets(&self) -> Option<&BetSet> {
        self.previous_bets.as_ref()
    }

    pub fn selected_chip(&self) -> Chips {
        self.selected_chip
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn roadmap(&self) -> &RoadmapState {
        &self.roadmap
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Сколько секунд осталось у текущего таймера (0, если не запущен).
    pub fn countdown_secs(&self) -> u32 {
        self.clock.remaining_secs()
    }
}
