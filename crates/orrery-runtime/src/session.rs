//! # Session
//!
//! World context owning both subsystems for the lifetime of one loaded
//! system. Built at world load, dropped at world teardown; nothing outlives
//! it.
//!
//! ## Loading Sequence
//!
//! 1. Register bodies, their auxiliary objects and proxies
//! 2. Resolve primary bodies by name (second pass, order independent)
//! 3. Plan every signal; per-signal failures are logged and skipped
//! 4. Purge stale distant proxy clones
//! 5. Remove every body flagged `destroy`

use crate::container::SessionConfig;
use crate::errors::SessionError;
use crate::system::{BodyEntry, SystemDescription};
use orr_01_signal_registry::{
    BuiltinCatalog, InMemoryAudioLibrary, RegistryStats, SignalPlan, SignalRegistryApi,
    SignalRegistryService, SignalscopeBuffer,
};
use orr_02_body_teardown::{
    BodyDescriptor, BodyTeardownApi, BodyTeardownService, InMemoryScene, NextTickScheduler,
    SceneCollaborator, TeardownError, TeardownReport,
};
use orrery_telemetry::{
    log_body_event, log_event, log_signal_event, metric_add, metric_inc, time_histogram,
    BODIES_REMOVED, DEFERRED_TASKS_PENDING, FREQUENCY_EXHAUSTIONS, IDENTIFIERS_MINTED,
    LIVE_BODIES, MISSING_ASSETS, PROXIES_DESTROYED, SUBSYSTEM_ERRORS, TEARDOWN_CYCLES,
    TICK_DURATION,
};
use parking_lot::Mutex;
use shared_types::{BodyId, ObjectHandle, SubsystemId, Tick};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Signal registry wired to the in-memory host adapters.
pub type SignalRegistry = SignalRegistryService<SignalscopeBuffer, InMemoryAudioLibrary>;

/// Body teardown wired to the in-memory host adapters.
pub type BodyTeardown = BodyTeardownService<InMemoryScene, NextTickScheduler>;

/// Single-writer handle for hosts that tick from another thread.
pub type SharedSession = Arc<Mutex<Session>>;

/// A signal planned during loading, attached to its body.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedSignal {
    pub body: BodyId,
    pub plan: SignalPlan,
}

/// Outcome of loading a system description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadReport {
    pub bodies_registered: usize,
    /// Entries rejected at registration (duplicate names)
    pub bodies_rejected: Vec<String>,
    pub signals_planned: usize,
    pub signals_skipped: usize,
    pub proxies_purged: Vec<ObjectHandle>,
    pub removals: Vec<TeardownReport>,
}

/// Outcome of one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub tasks_run: usize,
    pub proxies_destroyed: Vec<ObjectHandle>,
}

/// World context for one loaded system.
pub struct Session {
    id: Uuid,
    config: SessionConfig,
    signals: SignalRegistry,
    bodies: BodyTeardown,
    plans: Vec<PlannedSignal>,
}

impl Session {
    /// Create an empty session.
    ///
    /// # Errors
    /// - `Registry` if the registry limits are inconsistent
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let signals = SignalRegistryService::with_config(
            config.registry.clone(),
            BuiltinCatalog::stock(),
            SignalscopeBuffer::default(),
            InMemoryAudioLibrary::new(config.content_root.clone()),
        )?;
        let bodies = BodyTeardownService::with_config(
            config.teardown.clone(),
            InMemoryScene::new(),
            NextTickScheduler::with_delay(config.deferred_delay_ticks),
        );

        let id = Uuid::new_v4();
        info!(session = %id, "Session created");

        Ok(Self {
            id,
            config,
            signals,
            bodies,
            plans: Vec::new(),
        })
    }

    /// Load a system description into the session.
    pub fn load_system(&mut self, desc: &SystemDescription) -> LoadReport {
        let mut report = LoadReport::default();

        for clip in &desc.audio_clips {
            self.signals.audio_mut().register_clip(clip);
        }

        let mut registered: Vec<(BodyId, &BodyEntry)> = Vec::with_capacity(desc.bodies.len());
        for entry in &desc.bodies {
            match self.register_entry(entry) {
                Some(body) => registered.push((body, entry)),
                None => report.bodies_rejected.push(entry.name.clone()),
            }
        }
        report.bodies_registered = registered.len();

        for (body, entry) in &registered {
            self.link_primary(*body, entry);
        }

        let before = self.signals.stats();
        for (body, entry) in &registered {
            for info in &entry.signals {
                match self.signals.plan_signal(info) {
                    Ok(plan) => {
                        self.plans.push(PlannedSignal { body: *body, plan });
                        report.signals_planned += 1;
                    }
                    Err(e) => {
                        metric_inc!(MISSING_ASSETS);
                        metric_inc!(
                            SUBSYSTEM_ERRORS,
                            &[SubsystemId::SignalRegistry.tag(), "missing_asset"]
                        );
                        log_signal_event!(
                            debug,
                            "Signal skipped",
                            info.name,
                            body = %entry.name,
                            error = %e
                        );
                        report.signals_skipped += 1;
                    }
                }
            }
        }
        record_registry_delta(before, self.signals.stats());

        report.proxies_purged = self.bodies.purge_stale_proxies();
        metric_add!(PROXIES_DESTROYED, &["purge"], report.proxies_purged.len());

        for (body, entry) in &registered {
            if !entry.destroy {
                continue;
            }
            match self.remove_body(*body) {
                Ok(removal) => report.removals.push(removal),
                Err(e) => warn!(body = %entry.name, error = %e, "Failed to remove body"),
            }
        }

        log_event!(
            info,
            "runtime",
            "System loaded",
            session = %self.id,
            bodies = report.bodies_registered,
            signals = report.signals_planned,
            skipped = report.signals_skipped,
            removed = report.removals.len()
        );
        report
    }

    fn register_entry(&mut self, entry: &BodyEntry) -> Option<BodyId> {
        let is_star = entry.is_star || entry.stock.is_some_and(|s| s.is_star());
        let scene = self.bodies.scene_mut();
        let object = if is_star {
            scene.spawn_star(&entry.name)
        } else {
            scene.spawn(&entry.name)
        };

        let mut desc = BodyDescriptor::new(entry.name.clone(), object);
        if let Some(stock) = entry.stock {
            desc = desc.stock(stock);
        }
        if entry.is_star {
            desc = desc.star();
        }

        let body = match self.bodies.register_body(desc) {
            Ok(body) => body,
            Err(e) => {
                log_body_event!(error, "Body rejected", entry.name, error = %e);
                metric_inc!(
                    SUBSYSTEM_ERRORS,
                    &[SubsystemId::BodyTeardown.tag(), "duplicate_name"]
                );
                // The spawned object was never registered.
                if let Err(e) = self.bodies.scene_mut().destroy(object) {
                    debug!(%object, error = %e, "Rejected body object already gone");
                }
                return None;
            }
        };

        for aux in &entry.auxiliary {
            let handle = self.bodies.scene_mut().spawn(aux.scene_name());
            self.bodies.register_auxiliary(*aux, handle);
        }

        if entry.orbiter_proxy {
            let handle = self
                .bodies
                .scene_mut()
                .spawn(&format!("{}_OrbiterProxy", entry.name));
            if let Err(e) = self.bodies.register_orbiter_proxy(handle, body) {
                warn!(body = %entry.name, error = %e, "Orbiter proxy not registered");
            }
        }

        for proxy in &entry.distant_proxies {
            let key = proxy
                .key
                .clone()
                .unwrap_or_else(|| self.config.teardown.distant_proxy_key(&entry.name));
            let name = if proxy.clone {
                format!("{key}_DistantProxy(Clone)")
            } else {
                format!("{key}_DistantProxy")
            };
            let handle = self.bodies.scene_mut().spawn(&name);
            self.bodies.register_distant_proxy(handle, &key, proxy.clone);
        }

        debug!(body = %entry.name, id = %body, "Registered body");
        Some(body)
    }

    fn link_primary(&mut self, body: BodyId, entry: &BodyEntry) {
        let Some(primary_name) = &entry.primary_body else {
            return;
        };

        let primary = self.bodies.graph().find_by_name(primary_name);
        if primary.is_none() {
            warn!(
                body = %entry.name,
                primary = %primary_name,
                "Unknown primary body, treating as none"
            );
        }

        if let Err(e) = self.bodies.set_primary(body, primary) {
            warn!(body = %entry.name, error = %e, "Failed to set primary body");
        }
    }

    /// Remove a body and everything depending on it.
    pub fn remove_body(&mut self, body: BodyId) -> Result<TeardownReport, SessionError> {
        let report = self.bodies.remove_body(body)?;
        self.record_teardown(body, &report);
        Ok(report)
    }

    /// Remove a body by name.
    pub fn remove_by_name(&mut self, name: &str) -> Result<TeardownReport, SessionError> {
        let body = self
            .body_id(name)
            .ok_or_else(|| TeardownError::UnknownName(name.to_string()))?;
        self.remove_body(body)
    }

    fn record_teardown(&mut self, root: BodyId, report: &TeardownReport) {
        metric_add!(BODIES_REMOVED, report.deactivated.len());
        metric_add!(TEARDOWN_CYCLES, report.cycles.len());
        LIVE_BODIES.set(self.bodies.live_bodies().len() as f64);
        DEFERRED_TASKS_PENDING.set(self.bodies.scheduler().pending() as f64);

        log_body_event!(
            info,
            "Teardown complete",
            root,
            session = %self.id,
            deactivated = report.deactivated.len(),
            cycles = report.cycles.len(),
            scheduled = report.scheduled.len()
        );
    }

    /// Advance one tick and run every deferred task that is now due.
    pub fn tick(&mut self) -> TickReport {
        let _timer = time_histogram!(TICK_DURATION);

        let scheduler = self.bodies.scheduler_mut();
        let tick = scheduler.advance();
        let due = scheduler.drain_due();

        let mut proxies_destroyed = Vec::new();
        for task in &due {
            proxies_destroyed.extend(self.bodies.run_deferred(task));
        }

        metric_add!(PROXIES_DESTROYED, &["deferred"], proxies_destroyed.len());
        DEFERRED_TASKS_PENDING.set(self.bodies.scheduler().pending() as f64);

        if !due.is_empty() {
            debug!(%tick, tasks = due.len(), destroyed = proxies_destroyed.len(), "Ran deferred tasks");
        }

        TickReport {
            tick,
            tasks_run: due.len(),
            proxies_destroyed,
        }
    }

    /// Live bodies, pruning stale index entries.
    pub fn live_bodies(&mut self) -> Vec<BodyId> {
        self.bodies.live_bodies()
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn signals(&self) -> &SignalRegistry {
        &self.signals
    }

    pub fn signals_mut(&mut self) -> &mut SignalRegistry {
        &mut self.signals
    }

    pub fn bodies(&self) -> &BodyTeardown {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut BodyTeardown {
        &mut self.bodies
    }

    pub fn plans(&self) -> &[PlannedSignal] {
        &self.plans
    }

    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.bodies.graph().find_by_name(name)
    }
}

fn record_registry_delta(before: RegistryStats, after: RegistryStats) {
    metric_add!(
        IDENTIFIERS_MINTED,
        &["signal_identity"],
        after.signals_minted - before.signals_minted
    );
    metric_add!(
        IDENTIFIERS_MINTED,
        &["frequency_channel"],
        after.frequencies_minted - before.frequencies_minted
    );
    metric_add!(
        FREQUENCY_EXHAUSTIONS,
        after.frequency_exhaustions - before.frequency_exhaustions
    );
}
