//! Domain module for the Signal Registry
//!
//! Contains identifier value objects, the built-in catalog, the pools, the
//! name registry and the signal planning entities.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod pool;
pub mod registry;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
