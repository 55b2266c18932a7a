//! # Core Handles
//!
//! Identity types handed between the subsystems and the host engine.
//!
//! ## Clusters
//!
//! - **Bodies**: `BodyId`, issued by the dependency graph
//! - **Engine objects**: `ObjectHandle`, issued by the construction layer
//! - **Scheduling**: `Tick`
//! - **Subsystems**: `SubsystemId`, used for log prefixes and metric labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a celestial body registered in the dependency graph.
///
/// Issued sequentially by the graph; never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Handle of an engine-side object (body root, auxiliary structure, proxy).
///
/// The core never dereferences a handle; it only passes it back to the
/// scene collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub u64);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// Host simulation tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    /// The tick after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Tick(self.0.saturating_add(1))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}", self.0)
    }
}

/// Subsystem identifier following the ORR naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubsystemId {
    /// ORR-01: Signal Registry
    SignalRegistry = 1,
    /// ORR-02: Body Teardown
    BodyTeardown = 2,
}

impl SubsystemId {
    /// Get the subsystem name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SignalRegistry => "orr-01-signal-registry",
            Self::BodyTeardown => "orr-02-body-teardown",
        }
    }

    /// Short prefix used in log messages.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SignalRegistry => "orr-01",
            Self::BodyTeardown => "orr-02",
        }
    }
}
