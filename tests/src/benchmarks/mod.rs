//! # Orrery Benchmarks
//!
//! Workloads for the criterion harness in `benches/`.

pub mod orr_01_signal_registry;
pub mod orr_02_body_teardown;
