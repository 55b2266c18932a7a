//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory engine scene and tick scheduler, used by the runtime and by
//! integration tests.

mod scene;
mod scheduler;

pub use scene::{InMemoryScene, SceneEvent};
pub use scheduler::NextTickScheduler;
