//! Tiered prize-fund allocation with depletion handling.

/// Stateful payout policy over one play's prize fund.
///
/// The schedule is a fixed policy table keyed by 1-based round number.
/// Early rounds pay large amounts (two of them split a fixed total among the
/// winners), later rounds pay small flat per-winner amounts. Once the fund
/// cannot cover a scheduled payout the allocator clips to what is left and
/// raises the one-way `ruined` flag; the play loop then winds the game down
/// to its missed-numbers record.
#[derive(Debug, Clone)]
pub struct FundAllocator {
    fund: u64,
    ruined: bool,
}

impl FundAllocator {
    pub fn new(fund: u64) -> Self {
        Self {
            fund,
            ruined: false,
        }
    }

    /// Remaining fund balance.
    pub fn fund(&self) -> u64 {
        self.fund
    }

    /// One-way depletion flag.
    pub fn is_ruined(&self) -> bool {
        self.ruined
    }

    /// Per-winner prize for a 0-based round index, debiting the fund.
    ///
    /// Total-payout tiers (rounds 1 and 7) debit the full scheduled total
    /// even when integer division pays out slightly less per winner.
    ///
    /// # Panics
    /// Panics if `winner_count == 0`.
    pub fn allocate(&mut self, round_index: usize, winner_count: usize) -> u64 {
        assert!(winner_count > 0, "allocate requires at least one winner");
        let winners = winner_count as u64;
        let round_number = round_index + 1;

        let (mut prize, mut total): (u64, u64) = match round_number {
            1 => (0, 500_000),
            2 => (5_000_000, 0),
            3..=6 => (1_000_000, 0),
            7 => (0, 500_000),
            8..=12 => (10_000, 0),
            13..=15 => (5_000, 0),
            16..=18 => (1_000, 0),
            19..=21 => (500, 0),
            22..=24 => (300, 0),
            25..=27 => (200, 0),
            _ => (100, 0),
        };

        if self.fund / winners < prize || (total > 0 && self.fund < total) {
            prize = self.fund / winners;
            total = prize * winners;
            self.ruined = true;
        }

        if prize > 0 && total == 0 {
            total = prize * winners;
        } else if total > 0 && prize == 0 {
            prize = total / winners;
        }

        self.fund = self.fund.saturating_sub(total);

        prize
    }
}
