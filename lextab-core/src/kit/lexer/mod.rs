//! Table-driven lexer kit
//!
//! A table author declares, per state, an ordered list of
//! `(predicate, action, next state)` rules plus a token factory. The
//! [`Builder`] validates the rules and freezes them into a
//! [`TransitionTable`], which any number of [`LexStateMachine`] instances
//! (and therefore [`Tokenizer`] scans) can share.
//!
//! ```text
//! &str -> chars -> LineEndings -> LexStateMachine -> tokens
//! ```

pub mod characters;
pub mod core;
pub mod error;
pub mod predicate;
pub mod state_machine;
pub mod tokenizer;
pub mod types;

pub use self::core::{normalize_line_endings, LineEndings, NormalizeLineEndings};
pub use error::{BuildError, LexError};
pub use predicate::CharPredicate;
pub use state_machine::{Builder, LexStateMachine, TransitionTable};
pub use tokenizer::{Tokenizer, Tokens};
pub use types::{LexAction, StateId, StateLabel, TokenFactory};
