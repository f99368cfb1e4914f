//! Logger setup
//!
//! Per-phase log filtering built on `tracing` and `tracing-subscriber`. The
//! engine logs table compilation under `lextab::build` and scanning under
//! `lextab::lexer`.
//!
//! # Example
//! ```ignore
//! use lextab::config::{self, Config};
//! use lextab::logger::init_logger;
//!
//! config::init(Config::default())?;
//! init_logger()?;
//! ```

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::{self, LogConfig, Phase};

/// Output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored, multi-line (development)
    #[default]
    Pretty,
    Compact,
    /// One JSON object per event (tooling)
    Json,
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber with the default format.
///
/// Levels come from the global config when it is initialized, otherwise from
/// [`LogConfig::default`].
pub fn init_logger() -> Result<(), LoggerError> {
    init_with_format(LogFormat::default())
}

pub fn init_with_format(format: LogFormat) -> Result<(), LoggerError> {
    let log = config::config()
        .map(|cfg| cfg.log.clone())
        .unwrap_or_default();
    let layer = create_format_layer(format, io::stdout).with_filter(targets(&log));
    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(())
}

/// Target filter for every phase
pub fn targets(log: &LogConfig) -> Targets {
    Targets::new()
        .with_default(log.global)
        .with_target(Phase::Build.target(), log.level_for(Phase::Build))
        .with_target(Phase::Lexer.target(), log.level_for(Phase::Lexer))
}

fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Simple console logging for the current test binary
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Whether DEBUG events of `phase` would be recorded
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Build => tracing::enabled!(target: "lextab::build", tracing::Level::DEBUG),
        Phase::Lexer => tracing::enabled!(target: "lextab::lexer", tracing::Level::DEBUG),
    }
}
