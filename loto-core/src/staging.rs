//! Jackpot staging: rig the ball order so one purchased ticket is
//! guaranteed its half card within the first fifteen balls.

use crate::chance::{shuffle_prefix, RandomSource};
use crate::draw::JACKPOT_BALLS;
use crate::ticket::Ticket;

/// Pick a uniformly random purchased ticket and rewrite `balls` so the
/// ticket's first fifteen grid values occupy the first fifteen positions,
/// then re-shuffle those positions so the ball order does not give the
/// staged ticket away. The remaining balls keep their shuffled order.
///
/// Returns the staged ticket's position in `tickets`.
///
/// # Panics
/// Panics if no ticket is purchased; callers stage only sold editions.
pub fn stage_jackpot(balls: &mut [u8], tickets: &[Ticket], src: &mut dyn RandomSource) -> usize {
    assert!(
        tickets.iter().any(Ticket::is_purchased),
        "staging requires at least one purchased ticket"
    );

    let mut pos = src.pick(tickets.len());
    while !tickets[pos].is_purchased() {
        pos = (pos + 1) % tickets.len();
    }
    let staged = &tickets[pos];

    // A staged value can never end up below its target position (earlier
    // passes only push displaced balls forward), so scanning i+1.. is enough.
    for i in 0..JACKPOT_BALLS {
        for j in i + 1..balls.len() {
            if balls[j] == staged.num(i) {
                balls.swap(i, j);
            }
        }
    }

    shuffle_prefix(balls, JACKPOT_BALLS, src);

    pos
}
