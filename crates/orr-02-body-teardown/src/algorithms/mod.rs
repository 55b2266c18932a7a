//! Algorithms module for Body Teardown
//!
//! Contains:
//! - Cascading, cycle-safe teardown

pub mod teardown;

pub use teardown::{remove_body, TeardownContext, Traversal};
