//! Signal Registry Service
//!
//! Main service implementing SignalRegistryApi. Owns the name registry and
//! the two host collaborators it drives.

use crate::config::RegistryConfig;
use crate::domain::catalog::BuiltinCatalog;
use crate::domain::entities::{SignalInfo, SignalPlan};
use crate::domain::errors::RegistryError;
use crate::domain::pool::IdentifierPool;
use crate::domain::registry::{NameRegistry, RegistryStats};
use crate::domain::value_objects::{Identifier, IdentifierKind, Resolution};
use crate::ports::inbound::SignalRegistryApi;
use crate::ports::outbound::{AudioAssetResolver, FrequencyBufferSink};
use shared_types::ObjectHandle;
use tracing::{debug, error};

/// Signal Registry Service
///
/// Planning a signal:
/// 1. Resolve the frequency channel
/// 2. Resolve the signal identity
/// 3. Locate the audio asset
/// 4. Derive radii and identification flags
pub struct SignalRegistryService<B, A> {
    config: RegistryConfig,
    registry: NameRegistry,
    buffer: B,
    audio: A,
}

impl<B: FrequencyBufferSink, A: AudioAssetResolver> SignalRegistryService<B, A> {
    /// Create a new service over the stock catalog with default config
    pub fn new(buffer: B, audio: A) -> Self {
        Self {
            config: RegistryConfig::default(),
            registry: NameRegistry::with_defaults(),
            buffer,
            audio,
        }
    }

    /// Create a new service with custom config and catalog
    pub fn with_config(
        config: RegistryConfig,
        catalog: BuiltinCatalog,
        buffer: B,
        audio: A,
    ) -> Result<Self, RegistryError> {
        let pool = IdentifierPool::new(&config, &catalog)?;
        Ok(Self {
            config,
            registry: NameRegistry::new(catalog, pool),
            buffer,
            audio,
        })
    }

    fn locate_clip(&mut self, info: &SignalInfo) -> Result<ObjectHandle, RegistryError> {
        let missing = || RegistryError::MissingAsset {
            signal: info.name.clone(),
            clip: info.audio_clip.clone(),
            file: info.audio_file_path.clone(),
        };

        if let Some(clip) = &info.audio_clip {
            return self.audio.resolve_clip(clip).map_err(|_| missing());
        }

        if let Some(path) = &info.audio_file_path {
            return self.audio.load_file(path).map_err(|e| {
                error!(signal = %info.name, error = %e, "[orr-01] Audio file failed to load");
                missing()
            });
        }

        Err(missing())
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}

impl<B: FrequencyBufferSink, A: AudioAssetResolver> SignalRegistryApi for SignalRegistryService<B, A> {
    fn resolve(&mut self, name: &str, kind: IdentifierKind) -> Resolution {
        self.registry.resolve(name, kind, &mut self.buffer)
    }

    fn name_of(&self, id: Identifier) -> Option<&str> {
        self.registry.name_of(id)
    }

    fn plan_signal(&mut self, info: &SignalInfo) -> Result<SignalPlan, RegistryError> {
        let frequency = self.resolve(&info.frequency, IdentifierKind::FrequencyChannel).identifier;
        let name = self.resolve(&info.name, IdentifierKind::SignalIdentity).identifier;

        let clip = match self.locate_clip(info) {
            Ok(clip) => clip,
            Err(e) => {
                error!(signal = %info.name, "[orr-01] {}", e);
                return Err(e);
            }
        };

        let detection_radius = if info.detection_radius == 0.0 {
            info.source_radius + self.config.detection_radius_padding
        } else {
            info.detection_radius
        };

        let prevent_identification = self.registry.catalog().default_signal() == Some(name);

        debug!(
            signal = %info.name,
            %name,
            %frequency,
            detection_radius,
            "[orr-01] Planned signal"
        );

        Ok(SignalPlan {
            label: info.name.clone(),
            name,
            frequency,
            clip,
            position: info.position.unwrap_or_default(),
            source_radius: info.source_radius,
            detection_radius,
            identification_radius: info.identification_radius,
            prevent_identification,
            only_audible_to_scope: info.only_audible_to_scope,
            inside_cloak: info.inside_cloak,
            reveals: info.reveals.clone(),
        })
    }
}
