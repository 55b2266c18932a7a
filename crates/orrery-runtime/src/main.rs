//! # Orrery Runtime
//!
//! Loads a system description into a fresh session and drives its ticks.
//!
//! ```text
//! orrery-runtime systems/hearthian.json
//! ORR_SYSTEM_FILE=systems/hearthian.json ORR_MAX_TICKS=120 orrery-runtime
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry
//! 2. Load configuration (env + first argument)
//! 3. Parse the system description
//! 4. Build the session and load the system
//! 5. Run the tick loop until Ctrl+C or the tick limit

use std::sync::Arc;

use anyhow::{Context, Result};
use orrery_runtime::{Runtime, RuntimeConfig, Session, SystemDescription};
use orrery_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let config = RuntimeConfig::from_env_and_args(std::env::args().skip(1));
    let path = config
        .system_file
        .clone()
        .context("no system description given; pass a path or set ORR_SYSTEM_FILE")?;

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let desc = SystemDescription::from_json(&json)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut session = Session::new(config.session.clone())?;
    let report = session.load_system(&desc);
    info!(
        file = %path.display(),
        bodies = report.bodies_registered,
        signals = report.signals_planned,
        "Orrery ready"
    );

    let runtime = Arc::new(Runtime::new(session.into_shared(), &config));
    {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown signal received");
                    runtime.shutdown();
                }
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
            }
        });
    }

    let summary = runtime.run().await;
    info!(ticks = summary.ticks, reason = ?summary.reason, "Orrery stopped");

    if let Ok(metrics) = orrery_telemetry::encode_metrics() {
        debug!("{}", metrics);
    }

    Ok(())
}
