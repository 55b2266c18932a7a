//! Ports module for Body Teardown
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::BodyTeardownApi;
pub use outbound::{SceneCollaborator, TickScheduler};
