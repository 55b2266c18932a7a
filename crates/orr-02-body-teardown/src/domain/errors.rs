//! Error types for Body Teardown

use shared_types::{BodyId, CollaboratorError};
use thiserror::Error;

/// All errors that can occur in body teardown
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeardownError {
    /// Handle was never issued by this graph
    #[error("Unknown body: {0}")]
    UnknownBody(BodyId),

    /// No body registered under this name
    #[error("No body named {0}")]
    UnknownName(String),

    /// A body with this name is already registered
    #[error("Body {0} is already registered")]
    DuplicateName(String),

    /// Scene collaborator failure
    #[error("Scene collaborator failed: {0}")]
    Collaborator(#[from] CollaboratorError),
}
