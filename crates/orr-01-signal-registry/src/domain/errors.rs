//! Error types for the Signal Registry

use super::value_objects::IdentifierKind;
use thiserror::Error;

/// All errors that can occur in the signal registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Value is outside the range allowed for its kind
    #[error("Invalid {kind} value: {value}")]
    InvalidIdentifier { kind: IdentifierKind, value: u32 },

    /// Built-in catalog is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration limits are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Neither the audio clip nor the audio file could be found
    #[error("Couldn't find AudioClip {clip:?} or AudioFile {file:?} for signal {signal}")]
    MissingAsset {
        signal: String,
        clip: Option<String>,
        file: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = RegistryError::InvalidIdentifier {
            kind: IdentifierKind::FrequencyChannel,
            value: 3,
        };
        assert_eq!(err.to_string(), "Invalid frequency channel value: 3");
    }

    #[test]
    fn test_missing_asset_display() {
        let err = RegistryError::MissingAsset {
            signal: "Beacon".into(),
            clip: None,
            file: Some("audio/beacon.ogg".into()),
        };
        assert_eq!(
            err.to_string(),
            "Couldn't find AudioClip None or AudioFile Some(\"audio/beacon.ogg\") for signal Beacon"
        );
    }
}
