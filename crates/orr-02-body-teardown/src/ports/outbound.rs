//! Outbound Ports (Driven Ports / SPI)
//!
//! Implemented by the host engine.

use crate::domain::value_objects::DeferredTask;
use shared_types::{CollaboratorError, ObjectHandle};

/// Engine-side scene operations.
pub trait SceneCollaborator {
    /// Whether the object still exists and is active in the scene.
    fn object_exists(&self, handle: ObjectHandle) -> bool;

    /// Deactivate an object; it stays in the scene.
    fn deactivate(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError>;

    /// Destroy an object outright.
    fn destroy(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError>;

    /// Detach a star's light source and silence its audio.
    fn retire_star(&mut self, handle: ObjectHandle) -> Result<(), CollaboratorError>;
}

/// Per-tick scheduler for work that must not run in the current tick.
pub trait TickScheduler {
    /// Run `task` exactly once on a later tick.
    fn defer(&mut self, task: DeferredTask);
}
