//! A single lottery edition: its printed tickets, sale state, prize fund
//! and the rounds recorded by a play-through.

use loto_core::{shuffle_prefix, RandomSource, Round, Ticket};

use crate::error::GameError;

/// One print run of tickets together with everything that happened to it.
#[derive(Debug)]
pub struct Edition {
    id: usize,
    min_ticket_id: usize,
    tickets: Vec<Ticket>,
    jackpot_fund: u64,
    fund: u64,
    sold_count: usize,
    active: bool,
    sold: bool,
    simulate_jackpot: bool,
    rounds: Vec<Round>,
    jackpot_round: Option<Round>,
}

impl Edition {
    pub(crate) fn new(
        id: usize,
        min_ticket_id: usize,
        ticket_count: usize,
        jackpot_fund: u64,
        simulate_jackpot: bool,
        src: &mut dyn RandomSource,
    ) -> Self {
        let tickets = (0..ticket_count)
            .map(|offset| Ticket::generate(min_ticket_id + offset, src))
            .collect();
        Edition {
            id,
            min_ticket_id,
            tickets,
            jackpot_fund,
            fund: 0,
            sold_count: 0,
            active: true,
            sold: false,
            simulate_jackpot,
            rounds: Vec::new(),
            jackpot_round: None,
        }
    }

    /// Mark a random subset of tickets as purchased. `percentage` is in
    /// `(0, 100]`; at least one ticket is always sold.
    pub(crate) fn sell(
        &mut self,
        percentage: f64,
        src: &mut dyn RandomSource,
    ) -> Result<usize, GameError> {
        if self.sold {
            return Err(GameError::InvalidState {
                msg: "edition already sold",
            });
        }
        if !(percentage > 0.0 && percentage <= 100.0) {
            return Err(GameError::InvalidInput {
                msg: "sell percentage must be in (0, 100]",
            });
        }

        let count = (percentage * self.tickets.len() as f64 / 100.0) as usize;
        let count = count.max(1);

        let mut order: Vec<usize> = (0..self.tickets.len()).collect();
        let len = order.len();
        shuffle_prefix(&mut order, len, src);
        for &i in &order[..count] {
            self.tickets[i].mark_purchased();
        }

        self.sold = true;
        self.sold_count = count;
        Ok(count)
    }

    pub(crate) fn set_fund(&mut self, fund: u64) {
        self.fund = fund;
    }

    pub(crate) fn record_round(&mut self, round: Round) {
        self.rounds.push(round);
    }

    pub(crate) fn record_jackpot(&mut self, round: Round) {
        self.jackpot_round = Some(round);
    }

    pub(crate) fn record_missed(&mut self, balls: Vec<u8>) {
        self.rounds.push(Round {
            balls,
            winners: Vec::new(),
            prize: 0,
            missed_numbers: true,
        });
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn ticket_mut(&mut self, pos: usize) -> &mut Ticket {
        &mut self.tickets[pos]
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn min_ticket_id(&self) -> usize {
        self.min_ticket_id
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn sold_count(&self) -> usize {
        self.sold_count
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_sold(&self) -> bool {
        self.sold
    }

    /// The prize fund the edition started its play-through with. The running
    /// balance lives in the play-through itself.
    pub fn fund(&self) -> u64 {
        self.fund
    }

    pub fn jackpot_fund(&self) -> u64 {
        self.jackpot_fund
    }

    pub fn simulate_jackpot(&self) -> bool {
        self.simulate_jackpot
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Look a ticket up by its session-wide id.
    pub fn ticket_by_id(&self, id: usize) -> Option<&Ticket> {
        let offset = id.checked_sub(self.min_ticket_id)?;
        self.tickets.get(offset)
    }

    /// Normal rounds in draw order; a trailing entry may carry the missed
    /// numbers of an unfinished round.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn jackpot_round(&self) -> Option<&Round> {
        self.jackpot_round.as_ref()
    }

    /// Winning tickets across all recorded rounds, the jackpot included.
    pub fn winner_count(&self) -> usize {
        let normal: usize = self.rounds.iter().map(|r| r.winners.len()).sum();
        let jackpot = self.jackpot_round.as_ref().map_or(0, |r| r.winners.len());
        normal + jackpot
    }
}
