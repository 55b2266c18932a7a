//! Value objects for the Signal Registry

use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest bit a frequency channel may occupy.
pub const MAX_FREQUENCY_BIT: u32 = 30;

/// Which identifier space a value belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// Names a specific detectable entity
    SignalIdentity,
    /// Names a detection category; one bit flag per channel
    FrequencyChannel,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignalIdentity => write!(f, "signal identity"),
            Self::FrequencyChannel => write!(f, "frequency channel"),
        }
    }
}

/// Tagged identifier.
///
/// Built-in vs. custom is decided by the catalog and the pool ranges, not by
/// the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identifier {
    kind: IdentifierKind,
    value: u32,
}

impl Identifier {
    /// Signal identities accept any value.
    pub fn signal(value: u32) -> Self {
        Self {
            kind: IdentifierKind::SignalIdentity,
            value,
        }
    }

    /// Frequency channels must be a single bit no higher than bit 30.
    pub fn frequency(value: u32) -> Result<Self, RegistryError> {
        if !value.is_power_of_two() || value.trailing_zeros() > MAX_FREQUENCY_BIT {
            return Err(RegistryError::InvalidIdentifier {
                kind: IdentifierKind::FrequencyChannel,
                value,
            });
        }
        Ok(Self {
            kind: IdentifierKind::FrequencyChannel,
            value,
        })
    }

    /// Caller guarantees the value is in range for the kind.
    pub(crate) const fn from_raw(kind: IdentifierKind, value: u32) -> Self {
        Self { kind, value }
    }

    /// Build an identifier of the given kind, validating the range.
    pub fn new(kind: IdentifierKind, value: u32) -> Result<Self, RegistryError> {
        match kind {
            IdentifierKind::SignalIdentity => Ok(Self::signal(value)),
            IdentifierKind::FrequencyChannel => Self::frequency(value),
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdentifierKind::SignalIdentity => write!(f, "signal:{}", self.value),
            IdentifierKind::FrequencyChannel => write!(f, "freq:{:#x}", self.value),
        }
    }
}

/// Outcome of a frequency channel allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrequencyAllocation {
    /// A new channel was minted and the host buffer resized
    Minted(Identifier),
    /// The cap was reached; the sentinel channel is returned instead
    Exhausted(Identifier),
}

impl FrequencyAllocation {
    pub fn identifier(&self) -> Identifier {
        match self {
            Self::Minted(id) | Self::Exhausted(id) => *id,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
}

/// Where a resolved identifier came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionOrigin {
    /// Exact match in the built-in catalog
    Builtin,
    /// Previously recorded custom name (or display label)
    Recorded,
    /// Freshly minted by the pool
    Minted,
    /// Pool exhausted, sentinel returned and nothing recorded
    Exhausted,
}

/// Result of resolving a name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub identifier: Identifier,
    pub origin: ResolutionOrigin,
}

impl Resolution {
    pub fn new(identifier: Identifier, origin: ResolutionOrigin) -> Self {
        Self { identifier, origin }
    }
}
