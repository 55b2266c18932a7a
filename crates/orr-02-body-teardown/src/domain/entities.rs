//! Domain entities for Body Teardown

use super::links::StockBody;
use super::value_objects::SpecialLink;
use serde::{Deserialize, Serialize};
use shared_types::{BodyId, ObjectHandle};

/// What the construction layer supplies when registering a body.
///
/// The primary is set separately so bodies can be registered in any order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub object: ObjectHandle,
    pub stock: Option<StockBody>,
    pub is_star: bool,
}

impl BodyDescriptor {
    pub fn new(name: impl Into<String>, object: ObjectHandle) -> Self {
        Self {
            name: name.into(),
            object,
            stock: None,
            is_star: false,
        }
    }

    /// Tag as a stock body; stars are inferred from the tag.
    pub fn stock(mut self, stock: StockBody) -> Self {
        self.is_star |= stock.is_star();
        self.stock = Some(stock);
        self
    }

    pub fn star(mut self) -> Self {
        self.is_star = true;
        self
    }
}

/// A celestial body in the dependency graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyNode {
    pub id: BodyId,
    pub name: String,
    pub primary: Option<BodyId>,
    /// Cleared on deactivation; never set again
    pub live: bool,
    pub object: ObjectHandle,
    pub stock: Option<StockBody>,
    pub is_star: bool,
    pub special_links: Vec<SpecialLink>,
}

impl BodyNode {
    pub(crate) fn from_descriptor(id: BodyId, desc: BodyDescriptor) -> Self {
        Self {
            id,
            name: desc.name,
            primary: None,
            live: true,
            object: desc.object,
            stock: desc.stock,
            is_star: desc.is_star,
            special_links: Vec::new(),
        }
    }

    /// Append a link unless it is already present.
    pub(crate) fn push_link(&mut self, link: SpecialLink) {
        if !self.special_links.contains(&link) {
            self.special_links.push(link);
        }
    }
}

/// Stand-in orbiting in the map view, mirroring one body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbiterProxy {
    pub handle: ObjectHandle,
    pub mirrors: BodyId,
    pub active: bool,
}

/// Low-fidelity stand-in rendered at a distance.
///
/// Keyed only by name; there is no edge back to a body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistantProxy {
    pub handle: ObjectHandle,
    pub key: String,
    /// Duplicate spawned by the host alongside the canonical proxy
    pub clone: bool,
}
