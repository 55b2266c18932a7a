//! Application layer for the Signal Registry

pub mod service;
