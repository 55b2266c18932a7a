//! # Orrery Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion workloads per subsystem
//! │   ├── orr_01_signal_registry.rs
//! │   └── orr_02_body_teardown.rs
//! │
//! └── integration/      # Cross-crate flows through the session
//!     ├── flows.rs
//!     └── teardown_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p orrery-tests
//!
//! # By category
//! cargo test -p orrery-tests integration::
//!
//! # Benchmarks
//! cargo bench -p orrery-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
pub mod integration;
