//! Application layer for Body Teardown

pub mod service;
