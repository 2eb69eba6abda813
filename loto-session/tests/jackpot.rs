//! A fully scripted play-through that walks the staged-jackpot path.
//!
//! The script pins every random draw, so the whole story is known in
//! advance: one decoy ticket takes the first row at ball five, the staged
//! ticket completes its half card on ball fifteen for the jackpot, and the
//! identical remaining tickets later close the half-card round against an
//! empty fund.

use loto_core::ScriptedSource;
use loto_session::Session;

const TICKETS: usize = 10_000;

/// Scripted draws, in consumption order: ticket generation (30 per ticket),
/// the sale shuffle, the ball shuffle, the staging pick and the staged
/// prefix re-shuffle.
fn script() -> Vec<usize> {
    let mut s = Vec::new();
    // Ticket 0: grid 45,31,32,33,34 then 1..=25. Its first row is covered by
    // the staged ticket's values, so it races the staged ticket and wins the
    // first round one ball earlier.
    s.extend([44, 30, 31, 32, 33]);
    s.extend(0..25);
    // Ticket 1: grid 31..=60; the ticket the staging pick lands on.
    s.extend(30..60);
    // Remaining tickets all carry grid 61..=90.
    for _ in 2..TICKETS {
        s.extend(60..90);
    }
    // Sale shuffle (everything sells at 100% regardless of order).
    s.extend(std::iter::repeat(0).take(TICKETS));
    // All-zero ball shuffle turns 1..=90 into 90,1,2,...,89.
    s.extend(std::iter::repeat(0).take(90));
    // Staging picks ticket 1, then re-shuffles the staged prefix into
    // 45,31,32,...,44.
    s.push(1);
    s.extend(std::iter::repeat(0).take(15));
    s
}

#[test]
fn staged_jackpot_pays_from_the_jackpot_fund() {
    let mut s = Session::with_source(Box::new(ScriptedSource::new(script())));
    s.add_edition(TICKETS, 777_000, false, true).unwrap();
    assert_eq!(s.jackpot_fund(), 777_000);

    let sale = s.sell(100.0).unwrap();
    assert_eq!(sale.sold, TICKETS);
    assert_eq!(sale.fund, 500_000);

    let summary = s.play().unwrap();
    let ed = s.edition(0).unwrap();

    // Ball five: ticket 0 completes 45,31,32,33,34 and takes the whole
    // first-round pot.
    let first = &ed.rounds()[0];
    assert_eq!(first.balls, vec![45, 31, 32, 33, 34]);
    assert_eq!(first.winners, vec![0]);
    assert_eq!(first.prize, 500_000);

    // Ball fifteen: the staged ticket 1 completes 31..=45 while the
    // half-card round is current, which is the jackpot.
    let jackpot = ed.jackpot_round().expect("staged play hits the jackpot");
    assert_eq!(jackpot.balls, (35..=44).collect::<Vec<u8>>());
    assert_eq!(jackpot.winners, vec![1]);
    assert_eq!(jackpot.prize, 777_000);
    assert_eq!(s.jackpot_fund(), 0);

    // The jackpot leaves the half-card round open: ball 75 completes
    // 61..=75 for every remaining ticket at once, against a fund the first
    // round already emptied.
    let second = &ed.rounds()[1];
    assert_eq!(second.balls.len(), 71);
    assert_eq!(*second.balls.last().unwrap(), 75);
    assert_eq!(second.winners.len(), TICKETS - 2);
    assert_eq!(second.prize, 0);

    // Everything after the ruined close lands in the missed numbers.
    let missed = &ed.rounds()[2];
    assert!(missed.missed_numbers);
    assert_eq!(missed.balls, (76..=89).collect::<Vec<u8>>());

    assert_eq!(summary.participated, TICKETS);
    assert_eq!(summary.winners, TICKETS);
    assert_eq!(summary.fund_balance, 0);

    assert_eq!(s.ticket(0).unwrap().prize(), 500_000);
    assert_eq!(s.ticket(1).unwrap().prize(), 777_000);
    assert!(s.ticket(1).unwrap().is_winner());
}
