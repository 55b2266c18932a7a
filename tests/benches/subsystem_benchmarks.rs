//! # Orrery Subsystem Benchmarks
//!
//! | Subsystem | Workload |
//! |-----------|----------|
//! | orr-01 Signal Registry | name resolution, exhaustion, signal planning |
//! | orr-02 Body Teardown | chain, random tree and ring removal |

use criterion::{criterion_group, criterion_main};
use orrery_tests::benchmarks::{orr_01_signal_registry, orr_02_body_teardown};

criterion_group!(
    registry_benches,
    orr_01_signal_registry::bench_resolve,
    orr_01_signal_registry::bench_exhaust_frequencies,
    orr_01_signal_registry::bench_plan_signal,
);

criterion_group!(teardown_benches, orr_02_body_teardown::bench_remove_body);

criterion_main!(registry_benches, teardown_benches);
