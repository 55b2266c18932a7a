//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::TeardownError;
use crate::domain::value_objects::{DeferredTask, TeardownReport};
use shared_types::{BodyId, ObjectHandle};

/// Primary Body Teardown API
pub trait BodyTeardownApi {
    /// Remove `root` and everything that depends on it.
    ///
    /// Cycles abort only the branch that closes them. Distant proxies are
    /// handed to the tick scheduler rather than removed here.
    fn remove_body(&mut self, root: BodyId) -> Result<TeardownReport, TeardownError>;

    /// Destroy every distant proxy flagged as a clone.
    fn purge_stale_proxies(&mut self) -> Vec<ObjectHandle>;

    /// Execute a task previously handed to the tick scheduler.
    fn run_deferred(&mut self, task: &DeferredTask) -> Vec<ObjectHandle>;
}
