//! # Orrery Runtime
//!
//! Hosts both subsystems in an explicit world context.
//!
//! ## Modules
//!
//! - `container/` - Session and runtime configuration
//! - `system` - JSON system description
//! - `session` - World context: loading, teardown, deferred tasks per tick
//! - `runner` - Fixed-interval tick loop with graceful shutdown

pub mod container;
pub mod errors;
pub mod runner;
pub mod session;
pub mod system;

pub use container::{RuntimeConfig, SessionConfig};
pub use errors::SessionError;
pub use runner::{RunSummary, Runtime, StopReason};
pub use session::{LoadReport, PlannedSignal, Session, SharedSession, TickReport};
pub use system::{BodyEntry, DistantProxyEntry, SystemDescription};
