//! Lextab Core - table-driven tokenizer (pure logic, no IO)
//!
//! Contains the character predicates, the transition table builder, the lexer
//! engine and the tokenizer that wires line-ending normalization in front of it.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod kit;

// Re-export common types
pub use kit::lexer::{
    characters, normalize_line_endings, BuildError, Builder, CharPredicate, LexAction, LexError,
    LexStateMachine, LineEndings, NormalizeLineEndings, StateId, StateLabel, TokenFactory,
    Tokenizer, Tokens, TransitionTable,
};

// Re-export config types from lextab-config
pub use lextab_config::{LimitConfig, Phase};
