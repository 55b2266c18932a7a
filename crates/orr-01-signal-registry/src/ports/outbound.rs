//! Outbound Ports (Driven Ports / SPI)
//!
//! Implemented by the host's construction layer.

use shared_types::{CollaboratorError, ObjectHandle};

/// Host-side buffer holding the strongest signal per frequency.
///
/// It is indexed by channel count and must grow with every minted channel.
pub trait FrequencyBufferSink {
    /// Resize the buffer to exactly `slots` entries.
    fn resize_strongest_signals(&mut self, slots: usize);
}

/// Audio asset lookup.
pub trait AudioAssetResolver {
    /// Find a clip bundled with the host by name.
    fn resolve_clip(&self, name: &str) -> Result<ObjectHandle, CollaboratorError>;

    /// Load an audio file shipped with external content.
    fn load_file(&mut self, path: &str) -> Result<ObjectHandle, CollaboratorError>;
}
