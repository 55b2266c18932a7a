//! Proxy registry
//!
//! Orbiter proxies mirror one body and are deactivated with it. Distant
//! proxies are keyed by name only and are destroyed by deferred tasks or the
//! stale-clone purge.

use super::entities::{DistantProxy, OrbiterProxy};
use shared_types::{BodyId, ObjectHandle};

#[derive(Debug, Clone, Default)]
pub struct ProxyRegistry {
    orbiters: Vec<OrbiterProxy>,
    distant: Vec<DistantProxy>,
}

impl ProxyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_orbiter(&mut self, handle: ObjectHandle, mirrors: BodyId) {
        self.orbiters.push(OrbiterProxy {
            handle,
            mirrors,
            active: true,
        });
    }

    pub fn register_distant(&mut self, handle: ObjectHandle, key: impl Into<String>, clone: bool) {
        self.distant.push(DistantProxy {
            handle,
            key: key.into(),
            clone,
        });
    }

    /// Deactivate the first active orbiter mirroring `body` and return it.
    pub fn take_orbiter_of(&mut self, body: BodyId) -> Option<ObjectHandle> {
        let proxy = self
            .orbiters
            .iter_mut()
            .find(|p| p.active && p.mirrors == body)?;
        proxy.active = false;
        Some(proxy.handle)
    }

    /// Remove the first canonical and the first clone proxy under `key`.
    pub fn take_distant(&mut self, key: &str) -> Vec<DistantProxy> {
        let mut taken = Vec::new();
        for clone in [false, true] {
            if let Some(pos) = self
                .distant
                .iter()
                .position(|p| p.key == key && p.clone == clone)
            {
                taken.push(self.distant.remove(pos));
            }
        }
        taken
    }

    /// Remove every distant proxy flagged as a clone.
    pub fn take_clones(&mut self) -> Vec<DistantProxy> {
        let (clones, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.distant).into_iter().partition(|p| p.clone);
        self.distant = kept;
        clones
    }

    pub fn orbiters(&self) -> &[OrbiterProxy] {
        &self.orbiters
    }

    pub fn distant(&self) -> &[DistantProxy] {
        &self.distant
    }
}
