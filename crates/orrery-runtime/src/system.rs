//! # System Description
//!
//! JSON document describing the bodies and signals that external content
//! adds to (or removes from) the host system.
//!
//! ```json
//! {
//!   "audioClips": ["TH_RadioSignal"],
//!   "bodies": [
//!     { "name": "Wanderer_Body", "primaryBody": "Sun_Body",
//!       "orbiterProxy": true,
//!       "signals": [{ "name": "Beacon", "frequency": "Deep Space Radio",
//!                     "audioClip": "TH_RadioSignal" }] },
//!     { "name": "Sun_Body", "stock": "Sun" }
//!   ]
//! }
//! ```

use crate::errors::SessionError;
use orr_01_signal_registry::SignalInfo;
use orr_02_body_teardown::{AuxiliaryObject, StockBody};
use serde::{Deserialize, Serialize};

/// Whole system description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemDescription {
    /// Clips bundled with the host, available by name to signals
    pub audio_clips: Vec<String>,
    pub bodies: Vec<BodyEntry>,
}

/// One body and the structure built on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyEntry {
    pub name: String,
    /// Name of the body this one depends on; resolved after all bodies load
    pub primary_body: Option<String>,
    pub stock: Option<StockBody>,
    pub is_star: bool,
    /// Remove the body once the system has loaded
    pub destroy: bool,
    /// Stock auxiliary objects present in the scene alongside this body
    pub auxiliary: Vec<AuxiliaryObject>,
    /// Spawn an orbiter proxy mirroring this body
    pub orbiter_proxy: bool,
    pub distant_proxies: Vec<DistantProxyEntry>,
    pub signals: Vec<SignalInfo>,
}

/// A distant proxy in the scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistantProxyEntry {
    /// Proxy key; derived from the body name when absent
    pub key: Option<String>,
    pub clone: bool,
}

impl SystemDescription {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn signal_count(&self) -> usize {
        self.bodies.iter().map(|b| b.signals.len()).sum()
    }
}
