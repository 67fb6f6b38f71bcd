// src/bin/baccarat_table_runner.rs
//
// Живой стол: интервальный тик раз в `BACCARAT_TICK_MS`, авто-игрок ставит
// в каждом раунде, баланс уходит во внешний леджер после каждого расчёта.

use std::error::Error;
use std::time::Duration;

use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::{TableEvent, TableEventKind, TableSession, TickOutcome};
use baccarat_engine::infra::{load_table_config, BalanceSync, DeterministicRng, InMemoryLedger};
use tokio::signal;
use tokio::sync::broadcast;
use tokio::time;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PLAYER: &str = "dev-player";

/// Настройки запуска из переменных окружения.
struct RunnerSettings {
    config_path: Option<String>,
    tick_ms: u64,
    max_rounds: u64,
    opening_balance: u64,
    seed: u64,
}

impl RunnerSettings {
    fn from_env() -> Self {
        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|v| v.parse().ok())
        }

        Self {
            config_path: std::env::var("BACCARAT_CONFIG").ok(),
            tick_ms: parsed("BACCARAT_TICK_MS").unwrap_or(1000),
            max_rounds: parsed("BACCARAT_ROUNDS").unwrap_or(10),
            opening_balance: parsed("BACCARAT_BALANCE").unwrap_or(10_000),
            seed: parsed("BACCARAT_SEED").unwrap_or_else(rand::random),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = RunnerSettings::from_env();
    let config = match &settings.config_path {
        Some(path) => load_table_config(path)?,
        None => TableConfig::default(),
    };

    let ledger = InMemoryLedger::new().with_player(PLAYER, Chips::new(settings.opening_balance));
    let mut sync = BalanceSync::new(PLAYER, ledger);

    let mut rng = DeterministicRng::from_seed(settings.seed);
    let mut session = TableSession::new(1, config, sync.opening_balance(), &mut rng)?;
    info!(seed = settings.seed, tick_ms = settings.tick_ms, "table runner started");

    // Подписчики на события стола (в проде сюда цепляется websocket-слой).
    let (broadcaster, mut receiver) = broadcast::channel::<TableEvent>(256);
    let printer = tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            if let TableEventKind::RoundSettled(round) = &event.kind {
                println!(
                    "round {:>3} | {:<6} | P {} vs B {} | bets {} | net {:+} | balance {}",
                    round.round_id,
                    round.outcome.winner,
                    round.outcome.player_total,
                    round.outcome.banker_total,
                    round.bets.describe(),
                    round.net_change,
                    round.balance
                );
            }
        }
    });

    place_auto_bet(&mut session);
    publish(&mut session, &mut sync, &broadcaster);

    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut interval = time::interval(Duration::from_millis(settings.tick_ms));
    let mut settled_rounds = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match session.tick(1, &mut rng) {
                    TickOutcome::Dealt(_) => settled_rounds += 1,
                    TickOutcome::NextRound { .. } => {
                        if settled_rounds >= settings.max_rounds {
                            publish(&mut session, &mut sync, &broadcaster);
                            break;
                        }
                        place_auto_bet(&mut session);
                    }
                    _ => {}
                }
                publish(&mut session, &mut sync, &broadcaster);
            }
            _ = &mut shutdown => {
                info!("ctrl-c received, closing table");
                break;
            }
        }
    }

    let (balance, events) = session.close();
    sync.apply_events(&events);
    for event in events {
        let _ = broadcaster.send(event);
    }
    drop(broadcaster);
    let _ = printer.await;

    info!(
        %balance,
        rounds = settled_rounds,
        failed_writes = sync.failed_writes(),
        ledger_balance = ?sync.ledger().balance_of(PLAYER),
        "table runner finished"
    );
    Ok(())
}

/// Авто-игрок: повторяет прошлые ставки, если может, иначе ставит фишку на банкира.
fn place_auto_bet(session: &mut TableSession) {
    if session.rebet().is_ok() {
        return;
    }
    if let Err(err) = session.place_selected(Winner::Banker) {
        warn!(%err, "auto bet refused");
    }
}

/// Разослать накопленные события подписчикам и в леджер.
fn publish(
    session: &mut TableSession,
    sync: &mut BalanceSync<InMemoryLedger>,
    broadcaster: &broadcast::Sender<TableEvent>,
) {
    let events = session.drain_events();
    sync.apply_events(&events);
    for event in events {
        // Нет подписчиков — не ошибка.
        let _ = broadcaster.send(event);
    }
}
