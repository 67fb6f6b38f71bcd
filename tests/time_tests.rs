//! Таймеры стола: RoundClock, RoundTimings и интервальный tick-loop.

use std::time::Duration;

use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::table::TableConfig;
use baccarat_engine::engine::{TableSession, TickOutcome};
use baccarat_engine::infra::DeterministicRng;
use baccarat_engine::time_ctrl::{ClockState, RoundClock, RoundTimings};

#[test]
fn idle_clock_does_nothing() {
    let mut clock = RoundClock::new();
    assert!(!clock.is_running());
    assert_eq!(clock.elapse(5), ClockState::Idle);
}

#[test]
fn clock_counts_down_and_expires_once() {
    let mut clock = RoundClock::new();
    clock.start(3);

    assert_eq!(clock.elapse(1), ClockState::Running { remaining_secs: 2 });
    assert_eq!(clock.elapse(1), ClockState::Running { remaining_secs: 1 });
    assert_eq!(clock.elapse(1), ClockState::Expired);
    assert_eq!(clock.elapse(1), ClockState::Idle);
    assert!(!clock.is_running());
}

#[test]
fn clock_overshoot_expires() {
    let mut clock = RoundClock::new();
    clock.start(5);
    assert_eq!(clock.elapse(60), ClockState::Expired);
    assert_eq!(clock.remaining_secs(), 0);
}

#[test]
fn zero_length_clock_expires_on_first_elapse() {
    let mut clock = RoundClock::new();
    clock.start(0);
    assert!(clock.is_running());
    assert_eq!(clock.elapse(0), ClockState::Expired);
}

#[test]
fn stopped_clock_never_fires() {
    let mut clock = RoundClock::new();
    clock.start(10);
    clock.stop();
    assert_eq!(clock.remaining_secs(), 0);
    assert_eq!(clock.elapse(10), ClockState::Idle);
}

#[test]
fn restart_resets_remaining() {
    let mut clock = RoundClock::new();
    clock.start(10);
    clock.elapse(7);
    clock.start(10);
    assert_eq!(clock.remaining_secs(), 10);
}

#[test]
fn timings_from_config() {
    assert_eq!(RoundTimings::standard(), RoundTimings::new(15, 4));

    let config = TableConfig {
        betting_secs: 20,
        settle_display_secs: 2,
        ..TableConfig::default()
    };
    let timings = RoundTimings::from_config(&config);
    assert_eq!(timings.betting_secs, 20);
    assert_eq!(timings.settle_display_secs, 2);
}

/// Тот же цикл, что у живого стола: tokio interval раз в секунду, на каждом тике `tick(1)`.
/// Время на паузе, поэтому тест идёт мгновенно.
#[tokio::test(start_paused = true)]
async fn interval_loop_drives_full_round() {
    let mut rng = DeterministicRng::from_seed(11);
    let mut session = TableSession::new(1, TableConfig::default(), Chips(1_000), &mut rng).unwrap();
    session.place_bet(Winner::Banker, Chips(100)).unwrap();

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;

    let mut dealt_at = None;
    let mut next_round_at = None;

    for second in 1..=30u32 {
        interval.tick().await;
        match session.tick(1, &mut rng) {
            TickOutcome::Dealt(_) => dealt_at = Some(second),
            TickOutcome::NextRound { round_id } => {
                assert_eq!(round_id, 2);
                next_round_at = Some(second);
                break;
            }
            _ => {}
        }
    }

    assert_eq!(dealt_at, Some(15));
    assert_eq!(next_round_at, Some(19));
    assert_eq!(session.round_id(), 2);
    assert_eq!(session.history().len(), 1);
}
