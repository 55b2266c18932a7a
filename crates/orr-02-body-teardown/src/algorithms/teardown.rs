//! Cascading Teardown
//!
//! Depth-first walk from a root body. Each body is visited at most once per
//! walk; reaching a visited body again records a cycle and abandons only that
//! branch.
//!
//! Per body:
//! 0. skip if not live
//! 1. reject if already visited
//! 2. mark visiting
//! 3. recurse into cascaded bodies
//! 4. unlink and recurse into every live dependent; the walk starts with one
//!    pass over `all_live_bodies`, so stale entries are already pruned
//! 5. deactivate auxiliary objects, retire a star, deactivate the orbiter
//!    proxy, then the body itself
//! 6. defer removal of its distant proxies

use crate::config::TeardownConfig;
use crate::domain::graph::DependencyGraph;
use crate::domain::proxies::ProxyRegistry;
use crate::domain::value_objects::{DeferredTask, SpecialLink, TeardownReport, TeardownState};
use crate::ports::outbound::{SceneCollaborator, TickScheduler};
use shared_types::{BodyId, ObjectHandle};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Everything a walk reads or mutates.
pub struct TeardownContext<'a> {
    pub graph: &'a mut DependencyGraph,
    pub proxies: &'a mut ProxyRegistry,
    pub scene: &'a mut dyn SceneCollaborator,
    pub scheduler: &'a mut dyn TickScheduler,
    pub config: &'a TeardownConfig,
}

/// One teardown walk. Owns the visited set.
#[derive(Debug, Default)]
pub struct Traversal {
    states: HashMap<BodyId, TeardownState>,
    report: TeardownReport,
}

impl Traversal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settled state of `body` in this walk; `Pending` if not reached yet.
    ///
    /// A refused re-entry never overwrites the settled state; it is the
    /// `Rejected` outcome of the `visit` call that hit it.
    pub fn state_of(&self, body: BodyId) -> TeardownState {
        self.states
            .get(&body)
            .copied()
            .unwrap_or(TeardownState::Pending)
    }

    pub fn into_report(self) -> TeardownReport {
        self.report
    }

    /// Walk from `body`, returning the outcome of this branch.
    pub fn visit(&mut self, ctx: &mut TeardownContext<'_>, body: BodyId) -> TeardownState {
        let Some(node) = ctx.graph.node(body) else {
            debug!(%body, "[orr-02] Ignoring link to unknown body");
            return TeardownState::Pending;
        };
        let name = node.name.clone();

        // 0. Already inactive
        if !ctx.graph.is_live(body, &*ctx.scene) {
            debug!(body = %name, "[orr-02] Body already inactive, skipping");
            self.states.entry(body).or_insert(TeardownState::Skipped);
            self.report.skipped.push(body);
            return TeardownState::Skipped;
        }

        // 1. Re-entry
        if self.states.contains_key(&body) {
            warn!(
                body = %name,
                "[orr-02] Possible infinite recursion in teardown: {} might be its own primary body",
                name
            );
            self.report.cycles.push(body);
            return TeardownState::Rejected;
        }

        // 2.
        self.states.insert(body, TeardownState::Visiting);
        info!(body = %name, "[orr-02] Removing body");

        // 3. Cascaded bodies
        let cascades: Vec<BodyId> = ctx
            .graph
            .special_links_of(body)
            .iter()
            .filter_map(|link| match link {
                SpecialLink::Body(id) => Some(*id),
                SpecialLink::Object(_) => None,
            })
            .collect();
        for cascaded in cascades {
            self.visit(ctx, cascaded);
        }

        // 4. Dependents, before the body itself
        for dependent in ctx.graph.dependents_of(body) {
            ctx.graph.unlink(dependent);
            if !ctx.graph.is_live(dependent, &*ctx.scene) {
                debug!(body = %dependent, "[orr-02] Pruned stale dependent");
                continue;
            }
            self.visit(ctx, dependent);
        }

        // 5. Engine side
        self.deactivate_body(ctx, body);

        // 6. Distant proxies, next tick
        if ctx.config.schedule_distant_proxy_removal {
            let task = DeferredTask::RemoveDistantProxies {
                key: ctx.config.distant_proxy_key(&name),
            };
            ctx.scheduler.defer(task.clone());
            self.report.scheduled.push(task);
        }

        self.states.insert(body, TeardownState::Done);
        TeardownState::Done
    }

    fn deactivate_body(&mut self, ctx: &mut TeardownContext<'_>, body: BodyId) {
        let Some(node) = ctx.graph.node(body) else {
            return;
        };
        let object = node.object;
        let is_star = node.is_star;
        let auxiliary: Vec<ObjectHandle> = node
            .special_links
            .iter()
            .filter_map(|link| match link {
                SpecialLink::Object(handle) => Some(*handle),
                SpecialLink::Body(_) => None,
            })
            .collect();

        for handle in auxiliary {
            match ctx.scene.deactivate(handle) {
                Ok(()) => self.report.auxiliary.push(handle),
                Err(e) => debug!(%handle, error = %e, "[orr-02] Auxiliary object already gone"),
            }
        }

        if is_star {
            if let Err(e) = ctx.scene.retire_star(object) {
                warn!(%body, error = %e, "[orr-02] Failed to retire star");
            }
        }

        if ctx.config.deactivate_orbiter_proxies {
            if let Some(proxy) = ctx.proxies.take_orbiter_of(body) {
                match ctx.scene.deactivate(proxy) {
                    Ok(()) => self.report.orbiter_proxies.push(proxy),
                    Err(e) => debug!(%proxy, error = %e, "[orr-02] Orbiter proxy already gone"),
                }
            }
        }

        ctx.graph.mark_inactive(body);
        if let Err(e) = ctx.scene.deactivate(object) {
            debug!(%body, error = %e, "[orr-02] Body object already gone");
        }
        self.report.deactivated.push(body);
    }
}

/// Remove `root` and everything that depends on it.
pub fn remove_body(ctx: &mut TeardownContext<'_>, root: BodyId) -> TeardownReport {
    let live = ctx.graph.all_live_bodies(&*ctx.scene).count();
    debug!(%root, live, "[orr-02] Starting teardown");

    let mut traversal = Traversal::new();
    traversal.visit(ctx, root);
    let report = traversal.into_report();

    info!(
        %root,
        deactivated = report.deactivated.len(),
        cycles = report.cycles.len(),
        "[orr-02] Teardown complete"
    );
    report
}
