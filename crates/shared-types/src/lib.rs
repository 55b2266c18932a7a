//! # Shared Types Crate
//!
//! Handles and error types used across the Orrery subsystems.
//!
//! ## Design Principles
//!
//! - **Handles, not names**: engine objects and bodies are addressed by
//!   `ObjectHandle` / `BodyId` issued at construction time. String names are
//!   only used while resolving configuration.
//! - **One error vocabulary for collaborators**: every outbound port reports
//!   failures with `CollaboratorError`.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
