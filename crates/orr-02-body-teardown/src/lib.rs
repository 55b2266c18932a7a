//! # ORR-02: Body Teardown Subsystem
//!
//! Removes a celestial body and everything that structurally depends on it.
//!
//! ## Architecture
//!
//! - **Domain**: Body nodes, the dependency graph, stock special links, proxy
//!   records, teardown reports and deferred tasks
//! - **Algorithms**: Cycle-safe recursive teardown owning its visited set
//! - **Ports**: Inbound (BodyTeardownApi) and Outbound (SceneCollaborator,
//!   TickScheduler)
//! - **Application**: Service orchestration
//! - **Adapters**: In-memory scene and next-tick scheduler
//!
//! ## Teardown Order
//!
//! For a root body: cascaded bodies first, then every dependent (depth
//! first), then the root's auxiliary objects, orbiter proxy and engine object.
//! Distant proxies are removed on a later tick.

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{InMemoryScene, NextTickScheduler, SceneEvent};
pub use application::service::BodyTeardownService;
pub use config::TeardownConfig;
pub use domain::entities::*;
pub use domain::errors::TeardownError;
pub use domain::graph::{DependencyGraph, LiveBodies};
pub use domain::links::{AuxiliaryObject, StockBody};
pub use domain::proxies::ProxyRegistry;
pub use domain::value_objects::*;
pub use ports::inbound::BodyTeardownApi;
pub use ports::outbound::{SceneCollaborator, TickScheduler};
