//! Winning-ticket search across recorded editions.

use loto_core::Ticket;

use crate::edition::Edition;
use crate::error::GameError;
use crate::session::Session;

/// Which editions a search walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Every edition the session has run.
    All,
    /// A single edition by id.
    Edition(usize),
}

/// What counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchFilter {
    /// Winners of normal rounds whose prize falls in `[min, max]`. Jackpot
    /// winners are not normal-round winners and do not match.
    PrizeRange { min: u64, max: u64 },
    /// Jackpot winners only.
    JackpotOnly,
}

/// Sort ascending by ticket id.
pub fn by_id(a: &&Ticket, b: &&Ticket) -> std::cmp::Ordering {
    a.id().cmp(&b.id())
}

/// Sort descending by prize, ties broken by ascending id.
pub fn by_prize(a: &&Ticket, b: &&Ticket) -> std::cmp::Ordering {
    b.prize().cmp(&a.prize()).then(a.id().cmp(&b.id()))
}

impl Session {
    /// Collect winning tickets matching `filter` within `scope`, ordered by
    /// ascending ticket id. Re-sort with [`by_prize`] for a leaderboard view.
    pub fn search(
        &self,
        scope: SearchScope,
        filter: SearchFilter,
    ) -> Result<Vec<&Ticket>, GameError> {
        if let SearchFilter::PrizeRange { min, max } = filter {
            if max < min {
                return Err(GameError::InvalidInput {
                    msg: "prize range is inverted",
                });
            }
        }

        let editions: &[Edition] = match scope {
            SearchScope::All => self.editions(),
            SearchScope::Edition(id) => std::slice::from_ref(self.edition(id)?),
        };

        let mut hits = Vec::new();
        for edition in editions {
            match filter {
                SearchFilter::PrizeRange { min, max } => {
                    for round in edition.rounds() {
                        for &id in &round.winners {
                            if round.prize >= min && round.prize <= max {
                                hits.push(must_ticket(edition, id));
                            }
                        }
                    }
                }
                SearchFilter::JackpotOnly => {
                    if let Some(round) = edition.jackpot_round() {
                        for &id in &round.winners {
                            hits.push(must_ticket(edition, id));
                        }
                    }
                }
            }
        }
        hits.sort_by(by_id);
        Ok(hits)
    }
}

/// Recorded winner ids always resolve within their own edition.
fn must_ticket(edition: &Edition, id: usize) -> &Ticket {
    edition
        .ticket_by_id(id)
        .expect("recorded winner belongs to its edition")
}
