//! Built-in Catalog
//!
//! The host's closed enumerations of signal names and frequency channels.
//! Names resolve here first, by exact case-sensitive match.

use super::errors::RegistryError;
use super::value_objects::{Identifier, IdentifierKind};

/// Signal identity values set aside for custom content, in push order.
///
/// The last ten are the white-hole receiver identities, which the host never
/// uses and which are therefore absent from the stock catalog.
pub const RESERVED_SIGNAL_VALUES: [u32; 34] = [
    17, 18, 19, 26, 27, 28, 29, 33, 34, 35, 36, 37, 38, 39, 50, 51, 52, 53, 54, 55, 56, 57, 58,
    59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69,
];

/// First custom signal identity once the reserved values run out.
pub const SIGNAL_OVERFLOW_BASE: u32 = 200;

/// Usable frequency flags, built-ins included.
pub const MAX_FREQUENCY_CHANNELS: u32 = 31;

/// Name of the signal that cannot be identified by the scope.
pub const DEFAULT_SIGNAL_NAME: &str = "Default";

/// Sentinel channel returned when the frequency space is exhausted.
pub const DEFAULT_FREQUENCY_VALUE: u32 = 1;

const STOCK_SIGNALS: &[(&str, u32)] = &[
    ("Default", 0),
    ("Traveler_Esker", 1),
    ("Traveler_Chert", 2),
    ("Traveler_Riebeck", 3),
    ("Traveler_Gabbro", 4),
    ("Traveler_Feldspar", 5),
    ("Traveler_Nomai", 6),
    ("Traveler_Prisoner", 7),
    ("Quantum_TH_MuseumShard", 10),
    ("Quantum_TH_GroveShard", 11),
    ("Quantum_CT_Shard", 12),
    ("Quantum_BH_Shard", 13),
    ("Quantum_GD_Shard", 14),
    ("Quantum_QM", 15),
    ("Quantum_DB_Shard", 16),
    ("EscapePod_BH", 20),
    ("EscapePod_CT", 21),
    ("EscapePod_DB", 22),
    ("HideAndSeek_Galena", 30),
    ("HideAndSeek_Tephra", 31),
    ("HideAndSeek_Arkose", 32),
    ("RadioTower", 40),
    ("MapSatellite", 41),
];

const STOCK_FREQUENCIES: &[(&str, u32)] = &[
    ("Default", 1),
    ("Traveler", 2),
    ("Quantum", 4),
    ("EscapePod", 8),
    ("Statue", 16),
    ("WarpCore", 32),
    ("HideAndSeek", 64),
    ("Radio", 128),
];

/// Human-facing labels for built-in channels, seeded into the custom mapping.
const STOCK_FREQUENCY_LABELS: &[(u32, &str)] = &[
    (16, "FREQ_STATUE"),
    (1, "FREQ_UNKNOWN"),
    (32, "FREQ_WARP_CORE"),
];

/// Closed set of built-in names for both identifier kinds
#[derive(Clone, Debug)]
pub struct BuiltinCatalog {
    signals: Vec<(String, u32)>,
    frequencies: Vec<(String, u32)>,
    frequency_labels: Vec<(u32, String)>,
}

impl BuiltinCatalog {
    /// Build a catalog from explicit tables.
    ///
    /// Frequencies must be distinct single-bit values that together occupy
    /// the lowest bits, so that the first custom channel is
    /// `1 << frequencies.len()`.
    pub fn new(
        signals: Vec<(String, u32)>,
        frequencies: Vec<(String, u32)>,
    ) -> Result<Self, RegistryError> {
        let bound = u32::try_from(frequencies.len())
            .ok()
            .and_then(|n| 1u32.checked_shl(n))
            .ok_or_else(|| RegistryError::InvalidCatalog("too many built-in frequencies".into()))?;

        let mut seen = 0u32;
        for (name, value) in &frequencies {
            if !value.is_power_of_two() || *value >= bound || seen & value != 0 {
                return Err(RegistryError::InvalidCatalog(format!(
                    "frequency {name} has value {value}, expected a distinct bit below {bound}"
                )));
            }
            seen |= value;
        }

        Ok(Self {
            signals,
            frequencies,
            frequency_labels: Vec::new(),
        })
    }

    /// The host's stock tables, with the three built-in frequency labels.
    pub fn stock() -> Self {
        Self {
            signals: STOCK_SIGNALS
                .iter()
                .map(|(n, v)| ((*n).to_string(), *v))
                .collect(),
            frequencies: STOCK_FREQUENCIES
                .iter()
                .map(|(n, v)| ((*n).to_string(), *v))
                .collect(),
            frequency_labels: STOCK_FREQUENCY_LABELS
                .iter()
                .map(|(v, n)| (*v, (*n).to_string()))
                .collect(),
        }
    }

    /// Exact-match lookup of a built-in name.
    pub fn lookup(&self, kind: IdentifierKind, name: &str) -> Option<Identifier> {
        let table = match kind {
            IdentifierKind::SignalIdentity => &self.signals,
            IdentifierKind::FrequencyChannel => &self.frequencies,
        };
        table
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| Identifier::new(kind, *v).ok())
    }

    /// Whether the identifier belongs to the built-in set.
    pub fn contains(&self, id: Identifier) -> bool {
        let table = match id.kind() {
            IdentifierKind::SignalIdentity => &self.signals,
            IdentifierKind::FrequencyChannel => &self.frequencies,
        };
        table.iter().any(|(_, v)| *v == id.value())
    }

    /// Values of every built-in signal identity.
    pub fn signal_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.signals.iter().map(|(_, v)| *v)
    }

    /// Number of built-in frequency channels.
    pub fn frequency_count(&self) -> u32 {
        self.frequencies.len() as u32
    }

    /// Labels to pre-seed into the custom frequency mapping.
    pub fn frequency_labels(&self) -> &[(u32, String)] {
        &self.frequency_labels
    }

    /// The unidentifiable signal, if the catalog defines one.
    pub fn default_signal(&self) -> Option<Identifier> {
        self.lookup(IdentifierKind::SignalIdentity, DEFAULT_SIGNAL_NAME)
    }

    /// Sentinel channel used when the frequency space is exhausted.
    pub fn default_frequency() -> Identifier {
        Identifier::from_raw(IdentifierKind::FrequencyChannel, DEFAULT_FREQUENCY_VALUE)
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::stock()
    }
}
