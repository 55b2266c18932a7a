//! Ports module for the Signal Registry
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::SignalRegistryApi;
pub use outbound::{AudioAssetResolver, FrequencyBufferSink};
