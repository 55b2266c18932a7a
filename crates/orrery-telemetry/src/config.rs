//! Telemetry configuration from environment variables.

use shared_types::SubsystemId;
use std::env;

/// Configuration for logging and metrics.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or directives
    pub log_level: String,

    /// Whether to write logs to stdout
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "orrery".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ORR_SERVICE_NAME`: Service name (default: orrery)
    /// - `ORR_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `ORR_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `ORR_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("ORR_SERVICE_NAME").unwrap_or_else(|_| "orrery".to_string()),

            log_level: env::var("ORR_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("ORR_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("ORR_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Configuration scoped to one subsystem.
    pub fn for_subsystem(subsystem: SubsystemId) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("orrery-{}", subsystem.tag());
        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
