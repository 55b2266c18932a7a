//! # Orrery Telemetry
//!
//! Structured logging and Prometheus metrics for the Orrery subsystems.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orrery_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // Logs and metrics are now being collected
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ORR_SERVICE_NAME` | `orrery` | Service name in logs |
//! | `ORR_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ORR_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `ORR_JSON_LOGS` | `false` | JSON instead of pretty output |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    encode_metrics, register_metrics, MetricsHandle, BODIES_REMOVED, DEFERRED_TASKS_PENDING,
    FREQUENCY_EXHAUSTIONS, IDENTIFIERS_MINTED, LIVE_BODIES, MISSING_ASSETS, PROXIES_DESTROYED,
    SUBSYSTEM_ERRORS, TEARDOWN_CYCLES, TICK_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging and register metrics.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    init_logging(&config)?;

    Ok(TelemetryGuard {
        _metrics: metrics,
        service: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
    service: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service, "Shutting down telemetry");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Convenience macro for adding to a counter.
#[macro_export]
macro_rules! metric_add {
    ($metric:expr, $value:expr) => {
        $metric.inc_by($value as f64)
    };
    ($metric:expr, $labels:expr, $value:expr) => {
        $metric.with_label_values($labels).inc_by($value as f64)
    };
}
