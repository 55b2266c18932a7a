//! # Integration Flows
//!
//! System descriptions loaded into a real session, checked through the
//! in-memory scene and registry.

pub mod flows;
pub mod teardown_flows;
