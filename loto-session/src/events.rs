//! Append-only NDJSON event log of play-through results.
//!
//! One JSON object per line, each tagged with an `event` discriminator, so
//! downstream tooling can stream-parse a session's history.

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::edition::Edition;
use crate::session::PlaySummary;

/// Event log write errors.
#[derive(Error, Debug)]
pub enum EventLogError {
    #[error("Failed to write event log: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode event: {0}")]
    Json(#[from] serde_json::Error),
}

/// One recorded round: a normal close, the jackpot, or the terminal
/// missed-numbers record.
#[derive(Debug, Clone, Serialize)]
pub struct RoundEventV1 {
    pub event: &'static str,
    pub edition_id: usize,
    /// 1-based round number; absent for the jackpot record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_no: Option<usize>,
    pub balls: Vec<u8>,
    pub winner_ids: Vec<usize>,
    pub prize: u64,
}

/// End-of-play summary for one edition.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEventV1 {
    pub event: &'static str,
    pub edition_id: usize,
    pub participated: usize,
    pub winners: usize,
    pub fund_balance: u64,
}

impl SummaryEventV1 {
    pub fn new(edition_id: usize, summary: &PlaySummary) -> Self {
        SummaryEventV1 {
            event: "summary",
            edition_id,
            participated: summary.participated,
            winners: summary.winners,
            fund_balance: summary.fund_balance,
        }
    }
}

/// Flatten an edition's recorded rounds into log events, the jackpot first.
pub fn edition_events(edition: &Edition) -> Vec<RoundEventV1> {
    let mut events = Vec::new();
    if let Some(round) = edition.jackpot_round() {
        events.push(RoundEventV1 {
            event: "jackpot",
            edition_id: edition.id(),
            round_no: None,
            balls: round.balls.clone(),
            winner_ids: round.winners.clone(),
            prize: round.prize,
        });
    }
    for (i, round) in edition.rounds().iter().enumerate() {
        events.push(RoundEventV1 {
            event: if round.missed_numbers {
                "missed_numbers"
            } else {
                "round"
            },
            edition_id: edition.id(),
            round_no: Some(i + 1),
            balls: round.balls.clone(),
            winner_ids: round.winners.clone(),
            prize: round.prize,
        });
    }
    events
}

/// Buffered NDJSON writer.
pub struct EventLog {
    w: BufWriter<File>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open_append<P: AsRef<Path>>(path: P) -> Result<Self, EventLogError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(EventLog {
            w: BufWriter::new(file),
        })
    }

    /// Append one event as a JSON line.
    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), EventLogError> {
        serde_json::to_writer(&mut self.w, event)?;
        self.w.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), EventLogError> {
        self.w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn events_append_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");

        let mut session = Session::with_seed(9);
        session.add_edition(40, 1_000, false, false).unwrap();
        session.sell(100.0).unwrap();
        let summary = session.play().unwrap();
        let edition = session.edition(0).unwrap();

        let mut log = EventLog::open_append(&path).unwrap();
        for event in edition_events(edition) {
            log.write_event(&event).unwrap();
        }
        log.write_event(&SummaryEventV1::new(0, &summary)).unwrap();
        log.flush().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), edition.rounds().len() + 1);

        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("event").is_some());
        }
        let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
        assert_eq!(last["event"], "summary");
        assert_eq!(last["participated"], 40);
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");

        let summary = PlaySummary {
            participated: 5,
            winners: 1,
            fund_balance: 250,
        };
        for _ in 0..2 {
            let mut log = EventLog::open_append(&path).unwrap();
            log.write_event(&SummaryEventV1::new(0, &summary)).unwrap();
            log.flush().unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
