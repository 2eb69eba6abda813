//! Round-by-round ball matching.
//!
//! The engine accumulates the drawn ball sequence and, for each new ball,
//! decides whether any purchased, not-yet-winning ticket completes the
//! current round's pattern. Pattern width shrinks coarse to fine: one grid
//! row, then half the card, then the whole card.

use crate::ticket::{Ticket, COLS, GRID, MAX_NUM};

/// Balls consumed by the jackpot window: the first half card.
pub const JACKPOT_BALLS: usize = 15;

/// Winning-pattern width for a 0-based round index.
pub fn pattern_len(round_index: usize) -> usize {
    match round_index {
        0 => COLS,
        1 => GRID / 2,
        _ => GRID,
    }
}

/// One closed stage of matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Contiguous slice of the overall ball sequence belonging to this round.
    pub balls: Vec<u8>,
    /// Winning ticket ids; the tickets stay owned by the edition.
    pub winners: Vec<usize>,
    /// Prize per winner.
    pub prize: u64,
    /// Terminal record for drawn balls that closed no round.
    pub missed_numbers: bool,
}

/// Result of feeding one ball into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallOutcome {
    /// No round closed on this ball.
    Pending,
    /// At least one ticket completed the current pattern. `winners` holds
    /// positions into the ticket slice. `jackpot` marks the close of the
    /// half-card round at exactly the fifteenth ball; a jackpot close leaves
    /// the round index and the consumed offset where they are.
    Closed { winners: Vec<usize>, jackpot: bool },
}

/// Cumulative matching state for one play.
#[derive(Debug)]
pub struct DrawEngine {
    drawn: Vec<u8>,
    drawn_set: [bool; MAX_NUM + 1],
    round_index: usize,
    consumed: usize,
}

impl DrawEngine {
    pub fn new() -> Self {
        Self {
            drawn: Vec::with_capacity(MAX_NUM),
            drawn_set: [false; MAX_NUM + 1],
            round_index: 0,
            consumed: 0,
        }
    }

    /// Record a ball without matching it. Used after fund depletion and for
    /// the final ball, which only ever feeds the missed-numbers record.
    pub fn observe(&mut self, ball: u8) {
        debug_assert!((1..=MAX_NUM as u8).contains(&ball));
        self.drawn.push(ball);
        self.drawn_set[ball as usize] = true;
    }

    /// Record a ball and match it against the current round's pattern.
    ///
    /// A ticket wins iff the new ball equals one of its grid cells and the
    /// whole pattern-aligned block around that cell has been drawn (counting
    /// every ball so far, not just this round's).
    pub fn feed(&mut self, ball: u8, tickets: &[Ticket]) -> BallOutcome {
        self.observe(ball);

        let pattern = pattern_len(self.round_index);
        if self.drawn.len() < pattern {
            return BallOutcome::Pending;
        }

        let winners = self.matching_positions(ball, pattern, tickets);
        if winners.is_empty() {
            return BallOutcome::Pending;
        }

        let jackpot = self.drawn.len() == JACKPOT_BALLS && self.round_index == 1;
        BallOutcome::Closed { winners, jackpot }
    }

    /// Close the current round: consume the open balls and move to the next
    /// round index. Jackpot closes skip this, so the half-card round keeps
    /// accumulating afterwards.
    pub fn advance_round(&mut self) {
        self.consumed = self.drawn.len();
        self.round_index += 1;
    }

    /// Balls drawn since the last consumed round; the slice the next Round
    /// record (or the terminal missed-numbers record) covers.
    pub fn open_balls(&self) -> &[u8] {
        &self.drawn[self.consumed..]
    }

    /// Current 0-based round index.
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Total balls drawn so far.
    pub fn balls_drawn(&self) -> usize {
        self.drawn.len()
    }

    fn matching_positions(&self, last: u8, pattern: usize, tickets: &[Ticket]) -> Vec<usize> {
        let mut winners = Vec::new();
        for (pos, ticket) in tickets.iter().enumerate() {
            if !ticket.is_purchased() || ticket.is_winner() {
                continue;
            }
            if self.completes_pattern(ticket, last, pattern) {
                winners.push(pos);
            }
        }
        winners
    }

    fn completes_pattern(&self, ticket: &Ticket, last: u8, pattern: usize) -> bool {
        for cell in 0..GRID {
            if ticket.num(cell) != last {
                continue;
            }
            let begin = cell / pattern * pattern;
            if (begin..begin + pattern).all(|k| self.drawn_set[ticket.num(k) as usize]) {
                return true;
            }
        }
        false
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new()
    }
}
