//! Prometheus metrics for the Orrery subsystems.
//!
//! All metrics follow the naming convention: `orr_<subsystem>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts, Opts,
    Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // SIGNAL REGISTRY METRICS (ORR-01)
    // =========================================================================

    /// Custom identifiers minted, by kind
    pub static ref IDENTIFIERS_MINTED: CounterVec = CounterVec::new(
        Opts::new("orr_registry_identifiers_minted_total", "Custom identifiers minted"),
        &["kind"]  // kind: signal_identity/frequency_channel
    ).expect("metric creation failed");

    /// Frequency allocations that hit the cap
    pub static ref FREQUENCY_EXHAUSTIONS: Counter = Counter::new(
        "orr_registry_frequency_exhaustions_total",
        "Frequency allocations answered with the sentinel channel"
    ).expect("metric creation failed");

    /// Signals dropped because their audio asset was missing
    pub static ref MISSING_ASSETS: Counter = Counter::new(
        "orr_registry_missing_assets_total",
        "Signals skipped because no audio asset could be found"
    ).expect("metric creation failed");

    // =========================================================================
    // BODY TEARDOWN METRICS (ORR-02)
    // =========================================================================

    /// Bodies deactivated by teardown
    pub static ref BODIES_REMOVED: Counter = Counter::new(
        "orr_teardown_bodies_removed_total",
        "Total bodies deactivated by teardown"
    ).expect("metric creation failed");

    /// Cycles detected during teardown walks
    pub static ref TEARDOWN_CYCLES: Counter = Counter::new(
        "orr_teardown_cycles_detected_total",
        "Bodies reached twice within one teardown walk"
    ).expect("metric creation failed");

    /// Proxies destroyed, by reason
    pub static ref PROXIES_DESTROYED: CounterVec = CounterVec::new(
        Opts::new("orr_teardown_proxies_destroyed_total", "Proxies destroyed"),
        &["reason"]  // reason: deferred/purge
    ).expect("metric creation failed");

    /// Bodies currently live
    pub static ref LIVE_BODIES: Gauge = Gauge::new(
        "orr_teardown_live_bodies",
        "Number of bodies currently live"
    ).expect("metric creation failed");

    // =========================================================================
    // RUNTIME METRICS
    // =========================================================================

    /// Deferred tasks waiting for a later tick
    pub static ref DEFERRED_TASKS_PENDING: Gauge = Gauge::new(
        "orr_runtime_deferred_tasks_pending",
        "Deferred tasks waiting for a later tick"
    ).expect("metric creation failed");

    /// Time spent in one tick
    pub static ref TICK_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "orr_runtime_tick_duration_seconds",
            "Time spent processing one tick"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Subsystem errors by type
    pub static ref SUBSYSTEM_ERRORS: CounterVec = CounterVec::new(
        Opts::new("orr_subsystem_errors_total", "Errors by subsystem and type"),
        &["subsystem", "error_type"]
    ).expect("metric creation failed");
}

/// Handle to the registered metrics
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Calling it again is harmless.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Registry
        Box::new(IDENTIFIERS_MINTED.clone()),
        Box::new(FREQUENCY_EXHAUSTIONS.clone()),
        Box::new(MISSING_ASSETS.clone()),
        // Teardown
        Box::new(BODIES_REMOVED.clone()),
        Box::new(TEARDOWN_CYCLES.clone()),
        Box::new(PROXIES_DESTROYED.clone()),
        Box::new(LIVE_BODIES.clone()),
        // Runtime
        Box::new(DEFERRED_TASKS_PENDING.clone()),
        Box::new(TICK_DURATION.clone()),
        // Errors
        Box::new(SUBSYSTEM_ERRORS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
