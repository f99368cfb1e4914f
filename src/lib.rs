//! Lextab - a table-driven tokenizer
//!
//! Describe a lexer as a table of `(state, predicate, action, next state)`
//! rules and run it over text, one token at a time.
//!
//! # Architecture
//!
//! ```text
//! lextab-config/  - Pure configuration data (limits, phases)
//! lextab-core/    - Tables, lexer engine, tokenizer (no IO, no global state)
//! src/            - Facade: global config, logger setup, re-exports
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lextab::{builder, characters, LexAction};
//!
//! let tokenizer = builder("start")
//!     .on(characters::DIGIT, LexAction::Shift, "number")
//!     .stay(characters::ANY, LexAction::Skip)
//!     .begin("number")
//!     .stay(characters::DIGIT, LexAction::Shift)
//!     .on(characters::ANY, LexAction::Reduce, "start")
//!     .tokenizer()
//!     .unwrap();
//!
//! let tokens = tokenizer.tokenize("12 + 345").unwrap();
//! assert_eq!(tokens, vec!["12", "345"]);
//! ```

pub mod config;
pub mod logger;

pub use config::{Config, ConfigError, LogConfig};
pub use logger::{init_logger, LogFormat};
pub use lextab_core::{
    characters, normalize_line_endings, BuildError, Builder, CharPredicate, LexAction, LexError,
    LexStateMachine, LimitConfig, LineEndings, NormalizeLineEndings, Phase, StateId, StateLabel,
    TokenFactory, Tokenizer, Tokens, TransitionTable,
};

/// Install the global configuration.
///
/// Only configures; call [`init_logger`] as well to see log output.
pub fn init(config: Config) -> Result<(), ConfigError> {
    config::init(config)
}

/// Limits from the global config, or the defaults when it is not initialized
pub fn limits() -> LimitConfig {
    config::config()
        .map(|cfg| cfg.limits)
        .unwrap_or_default()
}

/// Start a table whose tokens are the flushed text, using the global limits.
pub fn builder<S: StateLabel>(init: S) -> Builder<S, String> {
    Builder::new(init).limits(limits())
}

/// Start a table with a custom token factory, using the global limits.
pub fn builder_with<S, T, F>(init: S, factory: F) -> Builder<S, T>
where
    S: StateLabel,
    F: Fn(&S, &str, bool) -> Option<T> + Send + Sync + 'static,
{
    Builder::with_factory(init, factory).limits(limits())
}
