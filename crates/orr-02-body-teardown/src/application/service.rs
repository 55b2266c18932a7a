//! Body Teardown Service
//!
//! Main service implementing BodyTeardownApi. Owns the dependency graph, the
//! proxy registry and the two engine collaborators.

use crate::algorithms::{remove_body, TeardownContext};
use crate::config::TeardownConfig;
use crate::domain::entities::BodyDescriptor;
use crate::domain::errors::TeardownError;
use crate::domain::graph::DependencyGraph;
use crate::domain::links::AuxiliaryObject;
use crate::domain::proxies::ProxyRegistry;
use crate::domain::value_objects::{DeferredTask, TeardownReport};
use crate::ports::inbound::BodyTeardownApi;
use crate::ports::outbound::{SceneCollaborator, TickScheduler};
use shared_types::{BodyId, ObjectHandle};
use tracing::{debug, info, warn};

/// Body Teardown Service
pub struct BodyTeardownService<S, T> {
    config: TeardownConfig,
    graph: DependencyGraph,
    proxies: ProxyRegistry,
    scene: S,
    scheduler: T,
}

impl<S: SceneCollaborator, T: TickScheduler> BodyTeardownService<S, T> {
    /// Create a new service with default config
    pub fn new(scene: S, scheduler: T) -> Self {
        Self::with_config(TeardownConfig::default(), scene, scheduler)
    }

    /// Create a new service with custom config
    pub fn with_config(config: TeardownConfig, scene: S, scheduler: T) -> Self {
        Self {
            config,
            graph: DependencyGraph::new(),
            proxies: ProxyRegistry::new(),
            scene,
            scheduler,
        }
    }

    pub fn register_body(&mut self, desc: BodyDescriptor) -> Result<BodyId, TeardownError> {
        self.graph.register_body(desc)
    }

    pub fn set_primary(
        &mut self,
        body: BodyId,
        primary: Option<BodyId>,
    ) -> Result<(), TeardownError> {
        self.graph.set_primary(body, primary)
    }

    pub fn register_auxiliary(&mut self, aux: AuxiliaryObject, handle: ObjectHandle) {
        self.graph.register_auxiliary(aux, handle);
    }

    /// Register an orbiter proxy mirroring `mirrors`.
    pub fn register_orbiter_proxy(
        &mut self,
        handle: ObjectHandle,
        mirrors: BodyId,
    ) -> Result<(), TeardownError> {
        if !self.graph.contains(mirrors) {
            return Err(TeardownError::UnknownBody(mirrors));
        }
        self.proxies.register_orbiter(handle, mirrors);
        Ok(())
    }

    pub fn register_distant_proxy(&mut self, handle: ObjectHandle, key: &str, clone: bool) {
        self.proxies.register_distant(handle, key, clone);
    }

    /// Remove a body by name. Configuration time only.
    pub fn remove_by_name(&mut self, name: &str) -> Result<TeardownReport, TeardownError> {
        let body = self
            .graph
            .find_by_name(name)
            .ok_or_else(|| TeardownError::UnknownName(name.to_string()))?;
        self.remove_body(body)
    }

    /// Collect the live bodies, pruning stale index entries.
    pub fn live_bodies(&mut self) -> Vec<BodyId> {
        self.graph.all_live_bodies(&self.scene).collect()
    }

    fn destroy_all(&mut self, handles: impl IntoIterator<Item = ObjectHandle>) -> Vec<ObjectHandle> {
        let mut destroyed = Vec::new();
        for handle in handles {
            match self.scene.destroy(handle) {
                Ok(()) => destroyed.push(handle),
                Err(e) => warn!(%handle, error = %e, "[orr-02] Failed to destroy proxy"),
            }
        }
        destroyed
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut DependencyGraph {
        &mut self.graph
    }

    pub fn proxies(&self) -> &ProxyRegistry {
        &self.proxies
    }

    pub fn config(&self) -> &TeardownConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

impl<S: SceneCollaborator, T: TickScheduler> BodyTeardownApi for BodyTeardownService<S, T> {
    fn remove_body(&mut self, root: BodyId) -> Result<TeardownReport, TeardownError> {
        if !self.graph.contains(root) {
            return Err(TeardownError::UnknownBody(root));
        }

        let mut ctx = TeardownContext {
            graph: &mut self.graph,
            proxies: &mut self.proxies,
            scene: &mut self.scene,
            scheduler: &mut self.scheduler,
            config: &self.config,
        };
        Ok(remove_body(&mut ctx, root))
    }

    fn purge_stale_proxies(&mut self) -> Vec<ObjectHandle> {
        let clones: Vec<ObjectHandle> = self
            .proxies
            .take_clones()
            .into_iter()
            .map(|p| p.handle)
            .collect();
        let destroyed = self.destroy_all(clones);
        info!(count = destroyed.len(), "[orr-02] Purged distant proxy clones");
        destroyed
    }

    fn run_deferred(&mut self, task: &DeferredTask) -> Vec<ObjectHandle> {
        match task {
            DeferredTask::RemoveDistantProxies { key } => {
                let proxies: Vec<ObjectHandle> = self
                    .proxies
                    .take_distant(key)
                    .into_iter()
                    .map(|p| p.handle)
                    .collect();
                let destroyed = self.destroy_all(proxies);
                debug!(key = %key, count = destroyed.len(), "[orr-02] Removed distant proxies");
                destroyed
            }
        }
    }
}
