//! Расчёт выплат по ставкам.

use baccarat_engine::domain::bets::BetSet;
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Winner;
use baccarat_engine::domain::table::Odds;
use baccarat_engine::engine::{calculate_payout, Payout};

fn bets(banker: u64, player: u64, tie: u64) -> BetSet {
    BetSet::new(Chips(banker), Chips(player), Chips(tie))
}

#[test]
fn banker_bet_wins_even_money() {
    let payout = calculate_payout(&bets(100, 0, 0), Winner::Banker, &Odds::default());
    assert_eq!(
        payout,
        Payout {
            win_amount: Chips(200),
            net_change: 100
        }
    );
}

#[test]
fn player_bet_pushes_on_tie() {
    let payout = calculate_payout(&bets(0, 100, 0), Winner::Tie, &Odds::default());
    assert_eq!(payout.win_amount, Chips(100));
    assert_eq!(payout.net_change, 0);
}

#[test]
fn both_sides_push_on_tie() {
    let payout = calculate_payout(&bets(50, 50, 0), Winner::Tie, &Odds::default());
    assert_eq!(payout.win_amount, Chips(100));
    assert_eq!(payout.net_change, 0);
}

#[test]
fn tie_bet_pays_eight_to_one() {
    let payout = calculate_payout(&bets(0, 0, 10), Winner::Tie, &Odds::default());
    assert_eq!(payout.win_amount, Chips(90));
    assert_eq!(payout.net_change, 80);
}

#[test]
fn losing_bets_are_lost() {
    let payout = calculate_payout(&bets(100, 0, 10), Winner::Player, &Odds::default());
    assert_eq!(payout.win_amount, Chips::ZERO);
    assert_eq!(payout.net_change, -110);
}

#[test]
fn mixed_bets_on_banker_win() {
    // banker выигрывает 1:1, ставка на ничью проиграна.
    let payout = calculate_payout(&bets(100, 0, 10), Winner::Banker, &Odds::default());
    assert_eq!(payout.win_amount, Chips(200));
    assert_eq!(payout.net_change, 90);
}

#[test]
fn all_legs_on_tie() {
    // banker и player возвращаются, ничья платит 8:1.
    let payout = calculate_payout(&bets(100, 50, 20), Winner::Tie, &Odds::default());
    assert_eq!(payout.win_amount, Chips(100 + 50 + 180));
    assert_eq!(payout.net_change, 160);
}

#[test]
fn empty_bets_pay_nothing() {
    for winner in Winner::ALL {
        let payout = calculate_payout(&BetSet::EMPTY, winner, &Odds::default());
        assert_eq!(payout.win_amount, Chips::ZERO);
        assert_eq!(payout.net_change, 0);
    }
}

#[test]
fn custom_odds_are_respected() {
    let odds = Odds {
        banker: 1,
        player: 1,
        tie: 9,
    };
    let payout = calculate_payout(&bets(0, 0, 10), Winner::Tie, &odds);
    assert_eq!(payout.win_amount, Chips(100));
    assert_eq!(payout.net_change, 90);
}

/// net_change всегда равен `win_amount - total`.
#[test]
fn net_change_matches_win_minus_stake() {
    let cases = [bets(10, 20, 30), bets(0, 500, 0), bets(1_000, 0, 100)];
    for bet in cases {
        for winner in Winner::ALL {
            let payout = calculate_payout(&bet, winner, &Odds::default());
            assert_eq!(
                payout.net_change,
                payout.win_amount.0 as i64 - bet.total().0 as i64
            );
        }
    }
}
