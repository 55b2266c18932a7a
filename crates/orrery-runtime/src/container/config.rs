//! # Runtime Configuration
//!
//! Unified configuration for both subsystems and the tick loop.
//!
//! All limits default to the stock host values; a system description may be
//! loaded with nothing but `RuntimeConfig::default()`.

use orr_01_signal_registry::RegistryConfig;
use orr_02_body_teardown::TeardownConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Configuration of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signal registry limits.
    pub registry: RegistryConfig,
    /// Teardown behaviour.
    pub teardown: TeardownConfig,
    /// Directory that content audio file paths are relative to.
    pub content_root: PathBuf,
    /// Ticks between deferring a task and running it.
    pub deferred_delay_ticks: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            teardown: TeardownConfig::default(),
            content_root: PathBuf::from("."),
            deferred_delay_ticks: 1,
        }
    }
}

/// Configuration of the runtime binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub session: SessionConfig,
    /// System description to load.
    pub system_file: Option<PathBuf>,
    /// Tick period in milliseconds.
    pub tick_interval_ms: u64,
    /// Stop after this many ticks; run until interrupted when unset.
    pub max_ticks: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            system_file: None,
            tick_interval_ms: 16,
            max_ticks: None,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden from the environment and the first CLI argument.
    ///
    /// - `ORR_SYSTEM_FILE` or the first argument: system description
    /// - `ORR_CONTENT_ROOT`: audio file root (default: the system file's directory)
    /// - `ORR_TICK_INTERVAL_MS`: tick period
    /// - `ORR_MAX_TICKS`: stop after this many ticks
    pub fn from_env_and_args(mut args: impl Iterator<Item = String>) -> Self {
        let mut config = Self::default();

        config.system_file = args
            .next()
            .or_else(|| std::env::var("ORR_SYSTEM_FILE").ok())
            .map(PathBuf::from);

        if let Ok(root) = std::env::var("ORR_CONTENT_ROOT") {
            config.session.content_root = PathBuf::from(root);
        } else if let Some(dir) = config.system_file.as_ref().and_then(|f| f.parent()) {
            config.session.content_root = dir.to_path_buf();
        }

        if let Ok(v) = std::env::var("ORR_TICK_INTERVAL_MS") {
            match v.parse() {
                Ok(ms) => config.tick_interval_ms = ms,
                Err(_) => warn!(value = %v, "ORR_TICK_INTERVAL_MS is not a number, ignoring"),
            }
        }

        if let Ok(v) = std::env::var("ORR_MAX_TICKS") {
            match v.parse() {
                Ok(n) => config.max_ticks = Some(n),
                Err(_) => warn!(value = %v, "ORR_MAX_TICKS is not a number, ignoring"),
            }
        }

        config
    }
}
