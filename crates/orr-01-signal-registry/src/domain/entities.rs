//! Domain entities for signal planning
//!
//! `SignalInfo` is the record authored by external content; `SignalPlan` is
//! what the construction layer needs to build the engine objects for it.

use super::value_objects::Identifier;
use serde::{Deserialize, Serialize};
use shared_types::ObjectHandle;

/// Local position relative to the owning body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A signal as authored in a system description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalInfo {
    /// Signal identity name; built-in or custom
    pub name: String,
    /// Frequency channel name; built-in or custom
    pub frequency: String,
    /// Name of a clip bundled with the host
    pub audio_clip: Option<String>,
    /// Path of an audio file shipped with the content
    pub audio_file_path: Option<String>,
    pub position: Option<Vector3>,
    pub source_radius: f32,
    /// Zero means `source_radius` plus the configured padding
    pub detection_radius: f32,
    pub identification_radius: f32,
    pub inside_cloak: bool,
    pub only_audible_to_scope: bool,
    /// Ship log fact revealed on identification
    pub reveals: Option<String>,
}

impl Default for SignalInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            frequency: String::new(),
            audio_clip: None,
            audio_file_path: None,
            position: None,
            source_radius: 1.0,
            detection_radius: 0.0,
            identification_radius: 10.0,
            inside_cloak: false,
            only_audible_to_scope: true,
            reveals: None,
        }
    }
}

/// Resolved signal, ready for the construction layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalPlan {
    /// Authored name, kept for object naming and logs
    pub label: String,
    pub name: Identifier,
    pub frequency: Identifier,
    pub clip: ObjectHandle,
    pub position: Vector3,
    pub source_radius: f32,
    pub detection_radius: f32,
    pub identification_radius: f32,
    /// Set for the built-in `Default` signal, which the scope never names
    pub prevent_identification: bool,
    pub only_audible_to_scope: bool,
    pub inside_cloak: bool,
    pub reveals: Option<String>,
}
