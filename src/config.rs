//! Global configuration
//!
//! A thread-safe, write-once configuration singleton holding log levels and
//! scan limits.
//!
//! # Example
//! ```
//! use lextab::config::{self, Config, LogConfig};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! config::init(cfg).unwrap();
//! assert!(config::is_initialized());
//! ```

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

pub use lextab_config::{LimitConfig, Phase};

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid log level {0:?}")]
    InvalidLevel(String),

    #[error("config already initialized")]
    AlreadyInitialized,
}

/// Install the global configuration; fails if it was already set.
pub fn init(config: Config) -> Result<(), ConfigError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Global configuration, if [`init`] was called
pub fn config() -> Option<&'static Config> {
    GLOBAL_CONFIG.get()
}

pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub log: LogConfig,
    /// Limits baked into tables built through [`crate::builder`]
    pub limits: LimitConfig,
}

/// Log levels, per phase
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Default level for every target
    pub global: Level,
    /// Table compilation level (`None` falls back to `global`)
    pub build: Option<Level>,
    /// Scan level (`None` falls back to `global`)
    pub lexer: Option<Level>,
}

impl LogConfig {
    /// Effective level of `phase`
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Build => self.build,
            Phase::Lexer => self.lexer,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            build: None,
            lexer: None,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    log: RawLogConfig,
    limits: LimitConfig,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawLogConfig {
    global: Option<String>,
    build: Option<String>,
    lexer: Option<String>,
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidLevel(raw.to_string()))
}

fn parse_optional_level(raw: Option<String>) -> Result<Option<Level>, ConfigError> {
    raw.as_deref().map(parse_level).transpose()
}

impl Config {
    /// Parse a configuration document.
    ///
    /// Every field is optional:
    ///
    /// ```json
    /// {
    ///   "log": { "global": "info", "lexer": "trace" },
    ///   "limits": { "max_zero_width_hops": 3 }
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let global = match raw.log.global {
            Some(level) => parse_level(&level)?,
            None => LogConfig::default().global,
        };
        Ok(Self {
            log: LogConfig {
                global,
                build: parse_optional_level(raw.log.build)?,
                lexer: parse_optional_level(raw.log.lexer)?,
            },
            limits: raw.limits,
        })
    }
}
