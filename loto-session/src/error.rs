//! Error type shared by the session-level operations.

use thiserror::Error;

/// Errors surfaced by session operations.
///
/// Fund depletion during a play-through is an outcome, not an error; it is
/// reported through the recorded rounds instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The caller passed a value outside the accepted range.
    #[error("invalid input: {msg}")]
    InvalidInput { msg: &'static str },
    /// The operation is not valid in the session's current state.
    #[error("invalid state: {msg}")]
    InvalidState { msg: &'static str },
    /// The referenced edition or ticket does not exist.
    #[error("not found: {msg}")]
    NotFound { msg: &'static str },
}
