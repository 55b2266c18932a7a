//! # Identifier Pool
//!
//! Mints custom identifiers for both kinds.
//!
//! ## Data Structures
//!
//! - `reserved`: stack of signal values set aside for custom content
//! - `next_overflow`: monotonically increasing counter used once the stack is
//!   empty; `None` once every value up to `u32::MAX` has been handed out
//! - `next_frequency`: doubling cursor over the frequency bit space
//!
//! ## Invariants Enforced
//!
//! - Signal identities are pairwise distinct (reserved values are distinct and
//!   all below the overflow base, which only grows)
//! - No built-in signal value is reserved or inside the overflow range
//! - Frequency channels never exceed bit 30; at the cap the sentinel is returned
//! - Every minted channel resizes the host's per-frequency buffer before it is
//!   handed out

use super::catalog::{BuiltinCatalog, MAX_FREQUENCY_CHANNELS};
use super::errors::RegistryError;
use super::value_objects::{FrequencyAllocation, Identifier, IdentifierKind};
use crate::config::RegistryConfig;
use crate::ports::outbound::FrequencyBufferSink;
use tracing::{debug, warn};

/// Pool of custom signal identities and frequency channels.
#[derive(Debug, Clone)]
pub struct IdentifierPool {
    /// Reserved signal values; the last pushed is popped first.
    reserved: Vec<u32>,
    /// Next overflow signal value.
    next_overflow: Option<u32>,
    /// Value of the next custom frequency channel.
    next_frequency: u32,
    /// Channels in use, built-ins included.
    channel_count: u32,
    /// Maximum channels, built-ins included.
    frequency_cap: u32,
}

impl IdentifierPool {
    /// Creates a pool minting around the built-ins of `catalog`.
    ///
    /// # Errors
    /// - `InvalidConfig` if the config is inconsistent, the built-in
    ///   frequencies already exceed the cap, or a built-in signal value could
    ///   also be minted
    pub fn new(config: &RegistryConfig, catalog: &BuiltinCatalog) -> Result<Self, RegistryError> {
        config.validate()?;

        if let Some(v) = catalog.signal_values().find(|v| {
            config.reserved_signal_values.contains(v) || *v >= config.signal_overflow_base
        }) {
            return Err(RegistryError::InvalidConfig(format!(
                "built-in signal value {} is reserved or at or above overflow base {}",
                v, config.signal_overflow_base
            )));
        }

        let builtin_frequencies = catalog.frequency_count();

        if builtin_frequencies > config.frequency_cap {
            return Err(RegistryError::InvalidConfig(format!(
                "{} built-in frequencies exceed cap {}",
                builtin_frequencies, config.frequency_cap
            )));
        }

        Ok(Self {
            reserved: config.reserved_signal_values.clone(),
            next_overflow: Some(config.signal_overflow_base),
            next_frequency: 1u32 << builtin_frequencies.min(MAX_FREQUENCY_CHANNELS - 1),
            channel_count: builtin_frequencies,
            frequency_cap: config.frequency_cap,
        })
    }

    /// Creates a pool matching the stock catalog and default limits.
    pub fn with_defaults() -> Self {
        let config = RegistryConfig::default();
        let builtins = BuiltinCatalog::stock().frequency_count();
        Self {
            reserved: config.reserved_signal_values,
            next_overflow: Some(config.signal_overflow_base),
            next_frequency: 1 << builtins,
            channel_count: builtins,
            frequency_cap: config.frequency_cap,
        }
    }

    /// Mint a signal identity. Never fails.
    pub fn allocate_signal_identity(&mut self) -> Identifier {
        let value = match self.reserved.pop() {
            Some(v) => v,
            None => match self.next_overflow {
                Some(v) => {
                    self.next_overflow = v.checked_add(1);
                    v
                }
                None => {
                    warn!("[orr-01] Signal identity space exhausted, reusing the last overflow value");
                    u32::MAX
                }
            },
        };
        debug!(value, remaining_reserved = self.reserved.len(), "[orr-01] Allocated signal identity");
        Identifier::signal(value)
    }

    /// Return a signal identity to the reserved stack.
    ///
    /// The caller guarantees the identity is no longer in use.
    pub fn release_signal_identity(&mut self, id: Identifier) {
        if id.kind() == IdentifierKind::SignalIdentity {
            self.reserved.push(id.value());
        }
    }

    /// Mint a frequency channel, or return the sentinel once the cap is reached.
    ///
    /// On success `buffer` is resized to `channel_count + 1` slots before the
    /// channel is returned.
    pub fn allocate_frequency_channel(
        &mut self,
        buffer: &mut dyn FrequencyBufferSink,
    ) -> FrequencyAllocation {
        if self.channel_count >= self.frequency_cap {
            warn!(
                channels = self.channel_count,
                cap = self.frequency_cap,
                "[orr-01] Can't store any more frequencies, returning the default channel"
            );
            return FrequencyAllocation::Exhausted(BuiltinCatalog::default_frequency());
        }

        let id = Identifier::from_raw(IdentifierKind::FrequencyChannel, self.next_frequency);
        self.next_frequency = self.next_frequency.wrapping_shl(1);
        self.channel_count += 1;

        buffer.resize_strongest_signals(self.channel_count as usize + 1);

        debug!(
            value = id.value(),
            channels = self.channel_count,
            "[orr-01] Allocated frequency channel"
        );
        FrequencyAllocation::Minted(id)
    }

    /// Channels in use, built-ins included.
    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    /// Reserved signal values not yet handed out.
    pub fn reserved_remaining(&self) -> usize {
        self.reserved.len()
    }

    /// Whether the frequency space is full.
    pub fn is_frequency_exhausted(&self) -> bool {
        self.channel_count >= self.frequency_cap
    }
}
