//! # Error Types
//!
//! Errors reported by the collaborator layer through outbound ports.

use crate::entities::ObjectHandle;
use thiserror::Error;

/// Failures raised by the host engine collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// A named audio clip is not known to the host.
    #[error("Audio clip not found: {0}")]
    ClipNotFound(String),

    /// An audio file could not be loaded.
    #[error("Couldn't load audio file {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    /// The engine object behind a handle no longer exists.
    #[error("Engine object missing: {0}")]
    ObjectMissing(ObjectHandle),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollaboratorError::LoadFailed {
            path: "audio/beacon.ogg".into(),
            reason: "unsupported codec".into(),
        };
        assert_eq!(
            err.to_string(),
            "Couldn't load audio file audio/beacon.ogg: unsupported codec"
        );
    }

    #[test]
    fn test_object_missing_display() {
        let err = CollaboratorError::ObjectMissing(ObjectHandle(9));
        assert_eq!(err.to_string(), "Engine object missing: obj#9");
    }
}
