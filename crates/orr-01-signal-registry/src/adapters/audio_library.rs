//! Audio library backed by a clip table and a content directory

use crate::ports::outbound::AudioAssetResolver;
use shared_types::{CollaboratorError, ObjectHandle};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Resolves host clips by name and content files relative to a root.
///
/// Loaded files are cached, so the same path yields the same handle.
#[derive(Debug, Clone)]
pub struct InMemoryAudioLibrary {
    content_root: PathBuf,
    clips: HashMap<String, ObjectHandle>,
    loaded: HashMap<String, ObjectHandle>,
    next_handle: u64,
}

/// Handles issued by the library start here, clear of scene objects.
const FIRST_AUDIO_HANDLE: u64 = 1 << 32;

impl InMemoryAudioLibrary {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            clips: HashMap::new(),
            loaded: HashMap::new(),
            next_handle: FIRST_AUDIO_HANDLE,
        }
    }

    fn issue(&mut self) -> ObjectHandle {
        let handle = ObjectHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Register a host clip under `name`.
    pub fn register_clip(&mut self, name: &str) -> ObjectHandle {
        if let Some(handle) = self.clips.get(name) {
            return *handle;
        }
        let handle = self.issue();
        self.clips.insert(name.to_string(), handle);
        handle
    }

    pub fn loaded_files(&self) -> usize {
        self.loaded.len()
    }
}

impl AudioAssetResolver for InMemoryAudioLibrary {
    fn resolve_clip(&self, name: &str) -> Result<ObjectHandle, CollaboratorError> {
        self.clips
            .get(name)
            .copied()
            .ok_or_else(|| CollaboratorError::ClipNotFound(name.to_string()))
    }

    fn load_file(&mut self, path: &str) -> Result<ObjectHandle, CollaboratorError> {
        if let Some(handle) = self.loaded.get(path) {
            return Ok(*handle);
        }

        let full = self.content_root.join(path);
        let meta = std::fs::metadata(&full).map_err(|e| CollaboratorError::LoadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if !meta.is_file() {
            return Err(CollaboratorError::LoadFailed {
                path: path.to_string(),
                reason: "not a file".into(),
            });
        }

        let handle = self.issue();
        self.loaded.insert(path.to_string(), handle);
        debug!(path, %handle, "[orr-01] Loaded audio file");
        Ok(handle)
    }
}
