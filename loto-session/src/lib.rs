//! Session layer of the lottery simulator.
//!
//! Builds on `loto-core`'s mechanics to run whole editions: printing and
//! selling tickets, playing the ninety-ball draw with prize settlement, and
//! querying or logging what happened afterwards.

pub mod config;
pub mod edition;
pub mod error;
pub mod events;
pub mod search;
pub mod session;

pub use config::{ConfigError, EditionPlan, ScenarioConfig};
pub use edition::Edition;
pub use error::GameError;
pub use events::{edition_events, EventLog, EventLogError, RoundEventV1, SummaryEventV1};
pub use search::{by_id, by_prize, SearchFilter, SearchScope};
pub use session::{PlaySummary, SellOutcome, Session, PRIZE_FUND_SHARE};

/// Version of the loto-session crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
