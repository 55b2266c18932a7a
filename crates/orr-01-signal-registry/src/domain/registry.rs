//! # Name Registry
//!
//! Bidirectional mapping between content-authored names and identifiers.
//!
//! Resolution order per kind:
//! 1. built-in catalog (exact, case-sensitive)
//! 2. recorded custom names (including the seeded display labels)
//! 3. mint through the pool and record
//!
//! The registry is append-only for the lifetime of a session. Identifiers are
//! never reassigned to a different name, and nothing is released when a body
//! is torn down.

use super::catalog::BuiltinCatalog;
use super::pool::IdentifierPool;
use super::value_objects::{Identifier, IdentifierKind, Resolution, ResolutionOrigin};
use crate::ports::outbound::FrequencyBufferSink;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// Custom names recorded for one identifier kind.
#[derive(Debug, Clone, Default)]
struct CustomNames {
    by_value: BTreeMap<u32, String>,
    by_name: HashMap<String, u32>,
}

impl CustomNames {
    fn record(&mut self, value: u32, name: &str) {
        self.by_value.insert(value, name.to_string());
        self.by_name.insert(name.to_string(), value);
    }

    fn value_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    fn name_of(&self, value: u32) -> Option<&str> {
        self.by_value.get(&value).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.by_value.len()
    }
}

/// Counters describing registry activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub signals_minted: u64,
    pub frequencies_minted: u64,
    pub frequency_exhaustions: u64,
}

/// Name <-> identifier registry owned by a session.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    catalog: BuiltinCatalog,
    pool: IdentifierPool,
    signals: CustomNames,
    frequencies: CustomNames,
    stats: RegistryStats,
}

impl NameRegistry {
    /// Creates a registry over `catalog`, seeding its frequency labels.
    pub fn new(catalog: BuiltinCatalog, pool: IdentifierPool) -> Self {
        let mut frequencies = CustomNames::default();
        for (value, label) in catalog.frequency_labels() {
            frequencies.record(*value, label);
        }

        Self {
            catalog,
            pool,
            signals: CustomNames::default(),
            frequencies,
            stats: RegistryStats::default(),
        }
    }

    /// Creates a registry over the stock catalog with default limits.
    pub fn with_defaults() -> Self {
        Self::new(BuiltinCatalog::stock(), IdentifierPool::with_defaults())
    }

    fn names(&self, kind: IdentifierKind) -> &CustomNames {
        match kind {
            IdentifierKind::SignalIdentity => &self.signals,
            IdentifierKind::FrequencyChannel => &self.frequencies,
        }
    }

    /// Resolve `name` to an identifier of `kind`, minting one if needed.
    ///
    /// Idempotent: the same name always yields the same identifier. A name
    /// that meets an exhausted frequency space gets the sentinel and is not
    /// recorded.
    pub fn resolve(
        &mut self,
        name: &str,
        kind: IdentifierKind,
        buffer: &mut dyn FrequencyBufferSink,
    ) -> Resolution {
        if let Some(id) = self.catalog.lookup(kind, name) {
            return Resolution::new(id, ResolutionOrigin::Builtin);
        }

        if let Some(value) = self.names(kind).value_of(name) {
            return Resolution::new(Identifier::from_raw(kind, value), ResolutionOrigin::Recorded);
        }

        info!(name, %kind, "[orr-01] Registering new name");

        match kind {
            IdentifierKind::SignalIdentity => {
                let id = self.pool.allocate_signal_identity();
                self.signals.record(id.value(), name);
                self.stats.signals_minted += 1;
                Resolution::new(id, ResolutionOrigin::Minted)
            }
            IdentifierKind::FrequencyChannel => {
                let allocation = self.pool.allocate_frequency_channel(buffer);
                if allocation.is_exhausted() {
                    self.stats.frequency_exhaustions += 1;
                    debug!(name, "[orr-01] Frequency not recorded, space exhausted");
                    return Resolution::new(allocation.identifier(), ResolutionOrigin::Exhausted);
                }
                let id = allocation.identifier();
                self.frequencies.record(id.value(), name);
                self.stats.frequencies_minted += 1;
                Resolution::new(id, ResolutionOrigin::Minted)
            }
        }
    }

    /// Reverse lookup. `None` for built-ins without a recorded label.
    pub fn name_of(&self, id: Identifier) -> Option<&str> {
        self.names(id.kind()).name_of(id.value())
    }

    /// Whether the identifier is part of the built-in catalog.
    pub fn is_builtin(&self, id: Identifier) -> bool {
        self.catalog.contains(id)
    }

    /// Number of recorded names of `kind`, labels included.
    pub fn recorded_count(&self, kind: IdentifierKind) -> usize {
        self.names(kind).len()
    }

    pub fn catalog(&self) -> &BuiltinCatalog {
        &self.catalog
    }

    pub fn pool(&self) -> &IdentifierPool {
        &self.pool
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats
    }
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
