//! Runtime configuration.

mod config;

pub use config::{RuntimeConfig, SessionConfig};
