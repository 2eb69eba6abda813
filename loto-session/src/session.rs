//! Game session: owns the editions, the randomness source and the
//! jackpot fund carried between editions.

use loto_core::{
    stage_jackpot, BallOutcome, DrawEngine, FundAllocator, RandomSource, Round, SeededSource,
    Ticket, MAX_NUM, TICKET_PRICE,
};

use crate::edition::Edition;
use crate::error::GameError;

/// Share of every sold ticket's price that seeds the edition's prize fund.
pub const PRIZE_FUND_SHARE: f64 = 0.5;

/// Result of selling an edition's tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellOutcome {
    /// Tickets marked as purchased.
    pub sold: usize,
    /// Prize fund raised by the sale.
    pub fund: u64,
}

/// Result of playing an edition through all ninety balls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Tickets that took part in the draw.
    pub participated: usize,
    /// Tickets that won a prize, the jackpot included.
    pub winners: usize,
    /// What was left of the prize fund when the draw ended.
    pub fund_balance: u64,
}

/// A lottery game session.
///
/// A session runs editions one at a time: [`add_edition`](Session::add_edition)
/// prints the tickets, [`sell`](Session::sell) marks a share of them as
/// purchased, and [`play`](Session::play) draws all ninety balls and settles
/// the prizes. Past editions stay queryable.
pub struct Session {
    chance: Box<dyn RandomSource>,
    editions: Vec<Edition>,
    ticket_total: usize,
    jackpot_fund: u64,
    last_fund_balance: u64,
}

impl Session {
    /// Session with a reproducible randomness stream.
    pub fn with_seed(seed: u64) -> Self {
        Session::with_source(Box::new(SeededSource::seed_from_u64(seed)))
    }

    /// Session seeded from the operating system.
    pub fn from_entropy() -> Self {
        Session::with_source(Box::new(SeededSource::from_entropy()))
    }

    /// Session driven by a caller-supplied source; tests use this with a
    /// [`ScriptedSource`](loto_core::ScriptedSource).
    pub fn with_source(chance: Box<dyn RandomSource>) -> Self {
        Session {
            chance,
            editions: Vec::new(),
            ticket_total: 0,
            jackpot_fund: 0,
            last_fund_balance: 0,
        }
    }

    /// Print a new edition of `ticket_count` tickets and make it the active
    /// one. The previous edition is retired first, even when the new one is
    /// rejected.
    ///
    /// `jackpot_contribution` tops up the session's jackpot fund, and with
    /// `carry_balance` whatever the previous play-through left of its prize
    /// fund rolls into the jackpot fund too. `simulate_jackpot` rigs the
    /// eventual draw so one purchased ticket hits its half card on ball
    /// fifteen.
    ///
    /// Returns the new edition's id.
    pub fn add_edition(
        &mut self,
        ticket_count: usize,
        jackpot_contribution: u64,
        carry_balance: bool,
        simulate_jackpot: bool,
    ) -> Result<usize, GameError> {
        if let Some(previous) = self.editions.last_mut() {
            previous.deactivate();
        }
        if ticket_count == 0 {
            return Err(GameError::InvalidInput {
                msg: "edition needs at least one ticket",
            });
        }

        if carry_balance {
            self.jackpot_fund += self.last_fund_balance;
            self.last_fund_balance = 0;
        }
        self.jackpot_fund += jackpot_contribution;

        let id = self.editions.len();
        let edition = Edition::new(
            id,
            self.ticket_total,
            ticket_count,
            self.jackpot_fund,
            simulate_jackpot,
            self.chance.as_mut(),
        );
        self.ticket_total += ticket_count;
        self.editions.push(edition);
        Ok(id)
    }

    /// Sell `percentage` of the active edition's tickets (at least one) and
    /// raise its prize fund from the proceeds.
    pub fn sell(&mut self, percentage: f64) -> Result<SellOutcome, GameError> {
        let edition = self.editions.last_mut().ok_or(GameError::InvalidState {
            msg: "no active edition",
        })?;
        if !edition.is_active() {
            return Err(GameError::InvalidState {
                msg: "edition is retired",
            });
        }
        let sold = edition.sell(percentage, self.chance.as_mut())?;
        let fund = (TICKET_PRICE as f64 * PRIZE_FUND_SHARE) as u64 * sold as u64;
        edition.set_fund(fund);
        Ok(SellOutcome { sold, fund })
    }

    /// Draw all ninety balls for the active edition, settling a prize every
    /// time a ticket completes the current round's pattern.
    ///
    /// Once the fund cannot honour a scheduled prize it pays out what is
    /// left, and every later ball lands in a final missed-numbers round. The
    /// last ball is never matched, so a play-through always ends with one.
    /// The edition is retired afterwards.
    pub fn play(&mut self) -> Result<PlaySummary, GameError> {
        let edition = self.editions.last_mut().ok_or(GameError::InvalidState {
            msg: "no active edition",
        })?;
        if !edition.is_active() {
            return Err(GameError::InvalidState {
                msg: "edition already played",
            });
        }
        if !edition.is_sold() {
            return Err(GameError::InvalidState {
                msg: "edition not sold",
            });
        }

        let mut balls: Vec<u8> = (1..=MAX_NUM as u8).collect();
        let len = balls.len();
        loto_core::shuffle_prefix(&mut balls, len, self.chance.as_mut());
        if edition.simulate_jackpot() {
            stage_jackpot(&mut balls, edition.tickets(), self.chance.as_mut());
        }

        let mut allocator = FundAllocator::new(edition.fund());
        let mut engine = DrawEngine::new();

        for (i, &ball) in balls.iter().enumerate() {
            // The last ball only ever lands among the missed numbers, and
            // once the fund is ruined the rest of the draw does too.
            if allocator.is_ruined() || i == MAX_NUM - 1 {
                engine.observe(ball);
                continue;
            }
            let outcome = engine.feed(ball, edition.tickets());
            let (winners, jackpot) = match outcome {
                BallOutcome::Pending => continue,
                BallOutcome::Closed { winners, jackpot } => (winners, jackpot),
            };

            if jackpot {
                let prize = edition.jackpot_fund() / winners.len() as u64;
                let ids = settle(edition, &winners, prize);
                edition.record_jackpot(Round {
                    balls: engine.open_balls().to_vec(),
                    winners: ids,
                    prize,
                    missed_numbers: false,
                });
                self.jackpot_fund = 0;
                // The half-card round stays open; its regular close still
                // pays from the main fund.
            } else {
                let prize = allocator.allocate(engine.round_index(), winners.len());
                let ids = settle(edition, &winners, prize);
                edition.record_round(Round {
                    balls: engine.open_balls().to_vec(),
                    winners: ids,
                    prize,
                    missed_numbers: false,
                });
                engine.advance_round();
            }
        }

        let open = engine.open_balls();
        if !open.is_empty() {
            edition.record_missed(open.to_vec());
        }
        edition.deactivate();
        self.last_fund_balance = allocator.fund();

        Ok(PlaySummary {
            participated: edition.sold_count(),
            winners: edition.winner_count(),
            fund_balance: allocator.fund(),
        })
    }

    pub fn editions(&self) -> &[Edition] {
        &self.editions
    }

    pub fn edition(&self, id: usize) -> Result<&Edition, GameError> {
        self.editions.get(id).ok_or(GameError::NotFound {
            msg: "no such edition",
        })
    }

    /// Look a ticket up by its session-wide id, across all editions.
    pub fn ticket(&self, id: usize) -> Result<&Ticket, GameError> {
        self.editions
            .iter()
            .find_map(|e| e.ticket_by_id(id))
            .ok_or(GameError::NotFound {
                msg: "no such ticket",
            })
    }

    /// Jackpot fund available to the next edition.
    pub fn jackpot_fund(&self) -> u64 {
        self.jackpot_fund
    }

    /// Prize fund left over by the most recent play-through.
    pub fn last_fund_balance(&self) -> u64 {
        self.last_fund_balance
    }
}

/// Mark the winning tickets and translate grid positions to ticket ids.
fn settle(edition: &mut Edition, positions: &[usize], prize: u64) -> Vec<usize> {
    positions
        .iter()
        .map(|&pos| {
            let ticket = edition.ticket_mut(pos);
            ticket.set_prize(prize);
            ticket.mark_winner();
            ticket.id()
        })
        .collect()
}
