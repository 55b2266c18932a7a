//! # Dependency Graph
//!
//! Index of celestial bodies and the edges that tie their removal together.
//!
//! ## Data Structures
//!
//! - `nodes`: every body ever registered, by handle
//! - `index`: bodies still considered live; stale entries are pruned when
//!   observed through `all_live_bodies`
//! - `dependents`: reverse `primary -> dependents` index, kept on insertion
//! - `auxiliary`: registered handles of stock auxiliary objects
//!
//! Stock special links are resolved as bodies and auxiliary objects arrive,
//! so registration order does not matter.

use super::entities::{BodyDescriptor, BodyNode};
use super::errors::TeardownError;
use super::links::AuxiliaryObject;
use super::value_objects::SpecialLink;
use crate::ports::outbound::SceneCollaborator;
use shared_types::{BodyId, ObjectHandle};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Graph of bodies linked by primary-body edges and special links.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<BodyId, BodyNode>,
    index: BTreeSet<BodyId>,
    dependents: HashMap<BodyId, BTreeSet<BodyId>>,
    by_name: HashMap<String, BodyId>,
    auxiliary: HashMap<AuxiliaryObject, ObjectHandle>,
    next_id: u32,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body and resolve its stock special links.
    ///
    /// # Errors
    /// - `DuplicateName` if a body with the same name exists
    pub fn register_body(&mut self, desc: BodyDescriptor) -> Result<BodyId, TeardownError> {
        if self.by_name.contains_key(&desc.name) {
            return Err(TeardownError::DuplicateName(desc.name));
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;

        let node = BodyNode::from_descriptor(id, desc);
        let stock = node.stock;
        self.by_name.insert(node.name.clone(), id);
        self.nodes.insert(id, node);
        self.index.insert(id);

        if let Some(stock) = stock {
            let links = stock.links();

            // Cascades from this body to stock bodies already present
            let targets: Vec<BodyId> = self
                .nodes
                .values()
                .filter(|n| n.stock.is_some_and(|s| links.cascades.contains(&s)))
                .map(|n| n.id)
                .collect();
            // Cascades from stock bodies already present to this one
            let sources: Vec<BodyId> = self
                .nodes
                .values()
                .filter(|n| n.stock.is_some_and(|s| s.links().cascades.contains(&stock)))
                .map(|n| n.id)
                .collect();
            let objects: Vec<ObjectHandle> = links
                .auxiliary
                .iter()
                .filter_map(|aux| self.auxiliary.get(aux).copied())
                .collect();

            if let Some(node) = self.nodes.get_mut(&id) {
                for target in targets {
                    node.push_link(SpecialLink::Body(target));
                }
                for handle in objects {
                    node.push_link(SpecialLink::Object(handle));
                }
            }
            for source in sources {
                if let Some(node) = self.nodes.get_mut(&source) {
                    node.push_link(SpecialLink::Body(id));
                }
            }
        }

        debug!(body = %id, ?stock, "[orr-02] Registered body");
        Ok(id)
    }

    /// Set or clear the primary of `body`, keeping the reverse index in step.
    ///
    /// A body may be its own primary; teardown treats that as a cycle.
    pub fn set_primary(
        &mut self,
        body: BodyId,
        primary: Option<BodyId>,
    ) -> Result<(), TeardownError> {
        if let Some(p) = primary {
            if !self.nodes.contains_key(&p) {
                return Err(TeardownError::UnknownBody(p));
            }
        }

        let node = self
            .nodes
            .get_mut(&body)
            .ok_or(TeardownError::UnknownBody(body))?;
        let previous = std::mem::replace(&mut node.primary, primary);

        if let Some(old) = previous {
            if let Some(set) = self.dependents.get_mut(&old) {
                set.remove(&body);
            }
        }
        if let Some(p) = primary {
            self.dependents.entry(p).or_default().insert(body);
        }
        Ok(())
    }

    /// Register the handle of a stock auxiliary object.
    ///
    /// Every stock body whose table names `aux` gains an object link.
    pub fn register_auxiliary(&mut self, aux: AuxiliaryObject, handle: ObjectHandle) {
        self.auxiliary.insert(aux, handle);
        for node in self.nodes.values_mut() {
            if node.stock.is_some_and(|s| s.links().auxiliary.contains(&aux)) {
                node.push_link(SpecialLink::Object(handle));
            }
        }
    }

    /// Add a special link outside the stock table.
    pub fn add_special_link(
        &mut self,
        body: BodyId,
        link: SpecialLink,
    ) -> Result<(), TeardownError> {
        if let SpecialLink::Body(target) = link {
            if !self.nodes.contains_key(&target) {
                return Err(TeardownError::UnknownBody(target));
            }
        }
        self.nodes
            .get_mut(&body)
            .ok_or(TeardownError::UnknownBody(body))?
            .push_link(link);
        Ok(())
    }

    pub fn node(&self, body: BodyId) -> Option<&BodyNode> {
        self.nodes.get(&body)
    }

    pub fn contains(&self, body: BodyId) -> bool {
        self.nodes.contains_key(&body)
    }

    /// Primary of `body`, if any.
    pub fn primary_body_of(&self, body: BodyId) -> Option<BodyId> {
        self.nodes.get(&body).and_then(|n| n.primary)
    }

    /// Special links of `body`; empty for unknown handles.
    pub fn special_links_of(&self, body: BodyId) -> &[SpecialLink] {
        self.nodes
            .get(&body)
            .map(|n| n.special_links.as_slice())
            .unwrap_or(&[])
    }

    /// Bodies still indexed whose primary is `body`, in registration order.
    pub fn dependents_of(&self, body: BodyId) -> Vec<BodyId> {
        self.dependents
            .get(&body)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Lookup by name. Configuration time only.
    pub fn find_by_name(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    /// Live flag set and engine object present.
    pub fn is_live(&self, body: BodyId, scene: &dyn SceneCollaborator) -> bool {
        self.nodes
            .get(&body)
            .is_some_and(|n| n.live && scene.object_exists(n.object))
    }

    /// Lazily iterate live bodies, pruning stale entries from the index.
    ///
    /// Each call starts a fresh pass over the current index.
    pub fn all_live_bodies<'a>(&'a mut self, scene: &'a dyn SceneCollaborator) -> LiveBodies<'a> {
        let pending: Vec<BodyId> = self.index.iter().copied().collect();
        LiveBodies {
            graph: self,
            scene,
            pending: pending.into_iter(),
        }
    }

    /// Drop `body` from the live index and from its primary's dependents.
    pub fn unlink(&mut self, body: BodyId) {
        self.index.remove(&body);
        if let Some(primary) = self.primary_body_of(body) {
            if let Some(set) = self.dependents.get_mut(&primary) {
                set.remove(&body);
            }
        }
    }

    /// Clear the live flag. Terminal.
    pub fn mark_inactive(&mut self, body: BodyId) {
        if let Some(node) = self.nodes.get_mut(&body) {
            node.live = false;
        }
        self.index.remove(&body);
    }

    /// Bodies ever registered.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bodies currently in the live index, stale ones included.
    pub fn indexed_count(&self) -> usize {
        self.index.len()
    }

    pub fn bodies(&self) -> impl Iterator<Item = &BodyNode> {
        self.nodes.values()
    }
}

/// Lazy iterator over live bodies.
///
/// Stale entries are removed from the graph's index as they are passed.
pub struct LiveBodies<'a> {
    graph: &'a mut DependencyGraph,
    scene: &'a dyn SceneCollaborator,
    pending: std::vec::IntoIter<BodyId>,
}

impl Iterator for LiveBodies<'_> {
    type Item = BodyId;

    fn next(&mut self) -> Option<BodyId> {
        for body in self.pending.by_ref() {
            if self.graph.is_live(body, self.scene) {
                return Some(body);
            }
            debug!(%body, "[orr-02] Pruning stale body from index");
            self.graph.index.remove(&body);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.pending.len()))
    }
}
