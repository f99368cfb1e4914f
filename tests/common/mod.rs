//! Test helpers
//!
//! Every test in a binary shares one global config, installed on first use

#![allow(dead_code)]

use lextab::config::{self, Config};

/// Config used by the integration tests: zero-width hops disabled
pub const TEST_CONFIG: &str = r#"{
    "log": { "global": "warn", "lexer": "debug" },
    "limits": { "max_zero_width_hops": 0 }
}"#;

pub fn ensure_config() -> &'static Config {
    if !config::is_initialized() {
        let cfg = Config::from_json(TEST_CONFIG).unwrap();
        // another test may win the race, which is fine
        let _ = config::init(cfg);
    }
    config::config().unwrap()
}
