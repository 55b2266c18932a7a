//! # ORR-01: Signal Registry Subsystem
//!
//! Extends the host's closed set of signal identities and frequency channels
//! with names authored by external content.
//!
//! ## Architecture
//!
//! - **Domain**: Identifier value objects, built-in catalog, IdentifierPool,
//!   NameRegistry, signal planning entities
//! - **Ports**: Inbound (SignalRegistryApi) and Outbound (FrequencyBufferSink,
//!   AudioAssetResolver)
//! - **Application**: Service orchestration
//! - **Adapters**: In-memory signalscope buffer and audio library
//!
//! ## Identifier Spaces
//!
//! | Kind | Built-in | Custom | Exhaustion |
//! |------|----------|--------|------------|
//! | Signal identity | stock catalog | 34 reserved values, then 200, 201, ... | never |
//! | Frequency channel | 1, 2, 4 ... 128 | 256, 512, ... doubling | sentinel `Default` at 31 channels |

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::SignalRegistryService;
pub use config::RegistryConfig;
pub use domain::catalog::BuiltinCatalog;
pub use domain::entities::*;
pub use domain::errors::RegistryError;
pub use domain::pool::IdentifierPool;
pub use domain::registry::{NameRegistry, RegistryStats};
pub use domain::value_objects::*;
pub use ports::inbound::SignalRegistryApi;
pub use ports::outbound::{AudioAssetResolver, FrequencyBufferSink};
pub use adapters::{InMemoryAudioLibrary, SignalscopeBuffer};
