// src/bin/baccarat_dev_cli.rs

use baccarat_engine::api::{build_roadmap_view, build_table_view, TableViewDto};
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::{Side, Winner};
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::{EngineError, RandomSource, SettledRound, TableSession};
use baccarat_engine::infra::{DeterministicRng, SystemRng};
use tracing_subscriber::EnvFilter;

/// Аргументы: `baccarat_dev_cli [rounds] [seed]`.
/// Без seed шуз мешается системным RNG.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = std::env::args().skip(1);
    let rounds: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(20);
    let seed: Option<u64> = args.next().and_then(|a| a.parse().ok());

    println!("baccarat_dev_cli: стартуем dev-CLI, раундов: {rounds}…");

    match seed {
        Some(seed) => {
            println!("[CLI] Детерминированный шуз, seed={seed}.");
            run(rounds, &mut DeterministicRng::from_seed(seed));
        }
        None => run(rounds, &mut SystemRng),
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

fn run<R: RandomSource>(rounds: u64, rng: &mut R) {
    let config = TableConfig::default();
    let mut session = match TableSession::new(1, config, Chips::new(10_000), rng) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("[CLI] Конфиг стола отклонён: {err}");
            return;
        }
    };

    debug_print_table_state(&build_table_view(&session));

    for n in 0..rounds {
        println!();
        println!("================ ROUND {} =================", session.round_id());

        if let Err(err) = place_scripted_bets(&mut session, n) {
            println!("[CLI] Ставка отклонена: {err}. Останавливаемся.");
            break;
        }

        match session.deal(rng) {
            Ok(settled) => print_settled(&settled),
            Err(err) => {
                println!("[CLI] Сдача отклонена: {err}.");
                break;
            }
        }

        // Дожидаемся конца показа результата, чтобы открылся следующий раунд.
        let display = session.timings().settle_display_secs;
        session.tick(display, rng);
        session.drain_events();
    }

    println!();
    println!("================ ROADS =================");
    let roads = build_roadmap_view(session.roadmap());
    println!("bead:    {}", roads.bead.iter().collect::<String>());
    println!("big eye: {}", roads.big_eye.iter().collect::<String>());
    println!("small:   {}", roads.small.iter().collect::<String>());
    println!("roach:   {}", roads.roach.iter().collect::<String>());
    println!(
        "summary: B={} P={} T={}",
        roads.summary.banker, roads.summary.player, roads.summary.tie
    );
    print_big_road(&session);

    println!();
    println!("================ HISTORY (последние 10) =================");
    for record in session.history().iter().take(10) {
        println!(
            "#{:<4} {:<28} {:<7} {:+}",
            record.round_id, record.bets_description, record.winner, record.net_change
        );
    }

    let (balance, _) = session.close();
    println!();
    println!("[CLI] Итоговый баланс: {balance}");
}

/// Простой сценарий ставок: чередуем банкира и игрока, иногда ничья, иногда rebet/double.
fn place_scripted_bets(session: &mut TableSession, n: u64) -> Result<(), EngineError> {
    match n % 5 {
        0 => {
            session.place_bet(Winner::Banker, Chips::new(100))?;
        }
        1 => {
            session.place_bet(Winner::Player, Chips::new(50))?;
            session.place_bet(Winner::Tie, Chips::new(10))?;
        }
        2 => {
            session.rebet()?;
        }
        3 => {
            session.place_bet(Winner::Banker, Chips::new(100))?;
            session.double_bets()?;
        }
        _ => {
            session.select_chip(Chips::new(500))?;
            session.place_selected(Winner::Player)?;
        }
    }
    Ok(())
}

fn print_settled(settled: &SettledRound) {
    let outcome = &settled.outcome;
    println!("[CLI] Ставки: {}", settled.bets.describe());
    println!("[CLI] PLAYER: {}", outcome.player_hand);
    println!("[CLI] BANKER: {}", outcome.banker_hand);
    println!(
        "[CLI] Результат: {}{} | выплата {} | net {:+} | баланс {}",
        outcome.winner,
        if outcome.is_natural() { " (natural)" } else { "" },
        settled.payout.win_amount,
        settled.payout.net_change,
        settled.balance_after
    );
}

/// Big road в виде сетки: строки сверху вниз, колонки слева направо.
fn print_big_road(session: &TableSession) {
    let roadmap = session.roadmap();
    let rows = roadmap.limits().max_rows;
    let columns = roadmap.big_road();

    println!("big road:");
    for row in 0..rows {
        let line: String = columns
            .iter()
            .map(|col| {
                col.nodes
                    .iter()
                    .find(|n| n.row == row)
                    .map(|n| match (n.side, n.ties > 0) {
                        (Side::Banker, false) => 'B',
                        (Side::Banker, true) => 'b',
                        (Side::Player, false) => 'P',
                        (Side::Player, true) => 'p',
                    })
                    .unwrap_or('.')
            })
            .collect();
        println!("  {line}");
    }
}

fn debug_print_table_state(view: &TableViewDto) {
    println!(
        "[CLI] Стол {} | раунд {} | фаза {} | таймер {}s | баланс {} | фишка {} | лимиты {}..{}",
        view.table_id,
        view.round_id,
        view.phase,
        view.timer_secs,
        view.balance,
        view.selected_chip,
        view.min_bet,
        view.max_bet
    );
}
