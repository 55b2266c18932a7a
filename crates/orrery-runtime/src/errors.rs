//! Session errors

use orr_01_signal_registry::RegistryError;
use orr_02_body_teardown::TeardownError;
use thiserror::Error;

/// Failures while building or driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Signal registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("Body teardown: {0}")]
    Teardown(#[from] TeardownError),

    /// System description could not be parsed
    #[error("Invalid system description: {0}")]
    InvalidDescription(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidDescription(e.to_string())
    }
}
