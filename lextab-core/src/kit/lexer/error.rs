//! Table-authoring and scan-time errors
//!
//! State labels are rendered with their `Debug` form so the error types stay
//! independent of the label type.

use thiserror::Error;

use super::types::StateId;

/// Raised by [`Builder::build`](super::Builder::build) when the table is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("no transitions defined for state {state}")]
    NoTransitions { state: String },
    #[error("token factory panicked in state {state}: {message}")]
    FactoryPanicked { state: String, message: String },
}

/// Raised while a scan processes a character.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unhandled character {ch:?} in state {state}")]
    UnhandledCharacter { ch: char, state: String },
    #[error("bailing from potential stack overflow in state {state} on character {ch:?}")]
    HopLimitExceeded { ch: char, state: String, limit: usize },
    #[error("unexpected state id {0}")]
    UnknownState(StateId),
}
