// tests/infra_test.rs

use baccarat_engine::{
    domain::{
        chips::Chips,
        hand::Winner,
        table::{TableConfig, TableConfigError},
    },
    engine::{TableEvent, TableEventKind, TableSession},
    infra::{
        load_table_config, parse_table_config, BalanceLedger, BalancePayload, BalanceSync,
        ConfigError, DeterministicRng, InMemoryLedger, LedgerError,
    },
};

//
// ---------- helpers ----------
//

const PLAYER: &str = "alice";

/// Сыграть один раунд ставкой на банкира и вернуть события.
fn play_one_round(session: &mut TableSession, rng: &mut DeterministicRng) -> Vec<TableEvent> {
    session.place_bet(Winner::Banker, Chips(100)).unwrap();
    session.deal(rng).unwrap();
    session.drain_events()
}

//
// ---------- config ----------
//

#[test]
fn partial_config_uses_defaults() {
    let config = parse_table_config(r#"{ "decks": 8, "min_bet": 25, "odds": { "tie": 9 } }"#).unwrap();

    assert_eq!(config.decks, 8);
    assert_eq!(config.min_bet, Chips(25));
    assert_eq!(config.max_bet, Chips(10_000));
    assert_eq!(config.odds.tie, 9);
    assert_eq!(config.odds.banker, 1);
    assert_eq!(config.roads.max_rows, 6);
}

#[test]
fn empty_config_is_default() {
    assert_eq!(parse_table_config("{}").unwrap(), TableConfig::default());
}

#[test]
fn invalid_config_is_rejected() {
    let err = parse_table_config(r#"{ "min_bet": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(TableConfigError::ZeroMinBet)));

    let err = parse_table_config("{ decks: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn config_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("baccarat-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "betting_secs": 20, "history_records": 10 }"#).unwrap();

    let config = load_table_config(&path).unwrap();
    assert_eq!(config.betting_secs, 20);
    assert_eq!(config.history_records, 10);

    std::fs::remove_file(&path).unwrap();
    let err = load_table_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

//
// ---------- ledger ----------
//

#[test]
fn balance_payload_json_shape() {
    let payload = BalancePayload {
        balance: Chips(1_234),
    };
    let json = payload.to_json().unwrap();
    assert_eq!(json, r#"{"balance":1234}"#);
    assert_eq!(BalancePayload::from_json(&json).unwrap(), payload);
    assert!(BalancePayload::from_json("nope").is_err());
}

#[test]
fn in_memory_ledger_basic_ops() {
    let mut ledger = InMemoryLedger::new().with_player(PLAYER, Chips(500));
    assert_eq!(ledger.load_balance(PLAYER), Ok(Chips(500)));
    assert_eq!(
        ledger.load_balance("bob"),
        Err(LedgerError::UnknownPlayer("bob".to_string()))
    );

    ledger
        .commit_balance(PLAYER, BalancePayload { balance: Chips(700) })
        .unwrap();
    assert_eq!(ledger.balance_of(PLAYER), Some(Chips(700)));

    ledger.set_fail_writes(Some("network down"));
    assert_eq!(
        ledger.commit_balance(PLAYER, BalancePayload { balance: Chips(1) }),
        Err(LedgerError::Unavailable("network down".to_string()))
    );
    assert_eq!(ledger.balance_of(PLAYER), Some(Chips(700)));
}

#[test]
fn opening_balance_falls_back_to_zero() {
    let known = BalanceSync::new(PLAYER, InMemoryLedger::new().with_player(PLAYER, Chips(900)));
    assert_eq!(known.opening_balance(), Chips(900));

    let unknown = BalanceSync::new("ghost", InMemoryLedger::new());
    assert_eq!(unknown.opening_balance(), Chips::ZERO);
}

#[test]
fn settled_round_is_pushed_to_ledger() {
    let mut rng = DeterministicRng::from_seed(21);
    let mut sync = BalanceSync::new(PLAYER, InMemoryLedger::new().with_player(PLAYER, Chips(1_000)));
    let mut session =
        TableSession::new(1, TableConfig::default(), sync.opening_balance(), &mut rng).unwrap();

    let events = play_one_round(&mut session, &mut rng);
    sync.apply_events(&events);

    assert_eq!(sync.ledger().balance_of(PLAYER), Some(session.balance()));
    let rounds = sync.ledger().rounds_of(PLAYER);
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0].round_id, 1);
    assert_eq!(rounds[0].balance, session.balance());
    assert_eq!(sync.failed_writes(), 0);
}

/// Сбой леджера не откатывает баланс в памяти и не останавливает стол.
#[test]
fn ledger_failure_does_not_roll_back() {
    let mut rng = DeterministicRng::from_seed(22);
    let mut sync = BalanceSync::new(PLAYER, InMemoryLedger::new().with_player(PLAYER, Chips(1_000)));
    let mut session =
        TableSession::new(1, TableConfig::default(), sync.opening_balance(), &mut rng).unwrap();

    sync.ledger_mut().set_fail_writes(Some("timeout"));
    let events = play_one_round(&mut session, &mut rng);
    let settled_balance = session.balance();
    sync.apply_events(&events);

    assert_eq!(sync.failed_writes(), 2, "record_round + commit_balance");
    assert_eq!(sync.ledger().balance_of(PLAYER), Some(Chips(1_000)));
    assert_eq!(session.balance(), settled_balance);
    assert!(sync.ledger().rounds_of(PLAYER).is_empty());

    // Связь вернулась — закрытие сессии дотягивает актуальный баланс.
    sync.ledger_mut().set_fail_writes(None);
    let (balance, events) = session.close();
    sync.apply_events(&events);
    assert_eq!(sync.ledger().balance_of(PLAYER), Some(balance));
}

#[test]
fn non_balance_events_are_ignored() {
    let mut sync = BalanceSync::new(PLAYER, InMemoryLedger::new().with_player(PLAYER, Chips(50)));
    let events = vec![
        TableEvent {
            index: 0,
            kind: TableEventKind::BettingOpened {
                round_id: 1,
                countdown_secs: 15,
            },
        },
        TableEvent {
            index: 1,
            kind: TableEventKind::CountdownTick { remaining_secs: 14 },
        },
    ];
    sync.apply_events(&events);
    assert_eq!(sync.ledger().balance_of(PLAYER), Some(Chips(50)));
    assert_eq!(sync.failed_writes(), 0);
}
