//! Domain module for Body Teardown
//!
//! Contains body nodes, the dependency graph, stock special links, proxy
//! records and teardown value objects.

pub mod entities;
pub mod errors;
pub mod graph;
pub mod links;
pub mod proxies;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
