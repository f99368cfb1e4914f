//! Lextab Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary of the lextab crates.

use serde::{Deserialize, Serialize};

/// Default number of zero-width hops (REDUCE / DEFER) one input character may take.
pub const DEFAULT_MAX_ZERO_WIDTH_HOPS: usize = 3;

/// Limits applied while a compiled table scans input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitConfig {
    /// How many times a single character may be re-dispatched without being
    /// consumed before the scan bails out
    pub max_zero_width_hops: usize,
}

/// Phase of the tokenizer, used for phase-specific logging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Table compilation and validation
    Build,
    /// Character dispatch and token emission
    Lexer,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Build => "build",
            Phase::Lexer => "lexer",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("lextab::{}", self.as_str())
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_zero_width_hops: DEFAULT_MAX_ZERO_WIDTH_HOPS,
        }
    }
}
