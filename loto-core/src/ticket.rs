//! Ticket grid generation and lifecycle flags.

use crate::chance::RandomSource;

/// Grid rows per ticket.
pub const ROWS: usize = 6;
/// Grid columns per ticket; one full row is the round-0 winning pattern.
pub const COLS: usize = 5;
/// Cells per ticket grid.
pub const GRID: usize = ROWS * COLS;
/// Largest ball value; balls are `1..=MAX_NUM`.
pub const MAX_NUM: usize = 90;
/// Fixed ticket price.
pub const TICKET_PRICE: u64 = 100;

/// One lottery ticket: a fixed grid of 30 distinct numbers plus
/// purchase/win/prize state.
///
/// `purchased` and `winner` are one-way flags. The prize is settable only
/// while `winner` is down, which makes it write-once in practice: the play
/// loop always sets the prize and raises the flag immediately after.
#[derive(Debug, Clone)]
pub struct Ticket {
    id: usize,
    nums: [u8; GRID],
    purchased: bool,
    winner: bool,
    prize: u64,
}

impl Ticket {
    /// Generate a ticket with a collision-free grid.
    ///
    /// Each cell draws a uniform value in `[0, 90)`; on collision with an
    /// already-taken value the draw probes linearly forward (wrapping) until
    /// a free value is found, and the probed value is the one accepted.
    /// The resulting bias toward successors of taken values is kept on
    /// purpose: generated grids are part of the observable output.
    pub fn generate(id: usize, src: &mut dyn RandomSource) -> Self {
        let mut taken = [false; MAX_NUM];
        let mut nums = [0u8; GRID];

        for cell in nums.iter_mut() {
            let mut value = src.pick(MAX_NUM);
            while taken[value] {
                value = (value + 1) % MAX_NUM;
            }
            taken[value] = true;
            *cell = (value + 1) as u8;
        }

        Self {
            id,
            nums,
            purchased: false,
            winner: false,
            prize: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Grid value at `cell` (row-major, values in 1..=90).
    pub fn num(&self, cell: usize) -> u8 {
        self.nums[cell]
    }

    pub fn nums(&self) -> &[u8; GRID] {
        &self.nums
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// One-way transition.
    pub fn mark_purchased(&mut self) {
        self.purchased = true;
    }

    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// One-way transition. Set the prize first: [`Ticket::set_prize`] is
    /// ignored once the flag is up.
    pub fn mark_winner(&mut self) {
        self.winner = true;
    }

    /// Record the prize; silently ignored once `winner` is set.
    pub fn set_prize(&mut self, prize: u64) {
        if self.winner {
            return;
        }
        self.prize = prize;
    }

    pub fn prize(&self) -> u64 {
        self.prize
    }
}
