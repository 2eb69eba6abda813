//! loto-core: game mechanics for the 90-ball lottery simulation.
//!
//! Everything here is pure, synchronous, and deterministic given a
//! [`chance::RandomSource`]: ticket grid generation, the round-matching draw
//! engine, the tiered prize-fund allocator, and jackpot staging. Edition and
//! session orchestration live in `loto-session`.

pub mod chance;
pub mod draw;
pub mod payout;
pub mod staging;
pub mod ticket;

pub use chance::{shuffle_prefix, RandomSource, ScriptedSource, SeededSource};
pub use draw::{pattern_len, BallOutcome, DrawEngine, Round, JACKPOT_BALLS};
pub use payout::FundAllocator;
pub use staging::stage_jackpot;
pub use ticket::{Ticket, COLS, GRID, MAX_NUM, ROWS, TICKET_PRICE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod chance_tests;
#[cfg(test)]
mod payout_tests;
