//! Strongest-signal-per-frequency buffer

use crate::domain::value_objects::Identifier;
use crate::ports::outbound::FrequencyBufferSink;

/// Fixed-size buffer indexed by frequency slot.
///
/// Each slot holds the strongest signal currently heard on that channel.
#[derive(Debug, Clone)]
pub struct SignalscopeBuffer {
    strongest: Vec<Option<Identifier>>,
    resizes: usize,
}

impl SignalscopeBuffer {
    /// Buffer sized for `channel_count` channels plus the unknown slot.
    pub fn new(channel_count: usize) -> Self {
        Self {
            strongest: vec![None; channel_count + 1],
            resizes: 0,
        }
    }

    pub fn slots(&self) -> usize {
        self.strongest.len()
    }

    /// Times the buffer was grown since creation.
    pub fn resizes(&self) -> usize {
        self.resizes
    }

    /// Slot for a frequency flag: bit index plus one, slot 0 is unknown.
    pub fn slot_of(frequency: Identifier) -> usize {
        if frequency.value() == 0 {
            0
        } else {
            frequency.value().trailing_zeros() as usize + 1
        }
    }

    pub fn record(&mut self, frequency: Identifier, signal: Identifier) -> bool {
        match self.strongest.get_mut(Self::slot_of(frequency)) {
            Some(slot) => {
                *slot = Some(signal);
                true
            }
            None => false,
        }
    }

    pub fn strongest(&self, frequency: Identifier) -> Option<Identifier> {
        self.strongest
            .get(Self::slot_of(frequency))
            .copied()
            .flatten()
    }
}

impl Default for SignalscopeBuffer {
    fn default() -> Self {
        // Stock host: eight built-in channels.
        Self::new(8)
    }
}

impl FrequencyBufferSink for SignalscopeBuffer {
    fn resize_strongest_signals(&mut self, slots: usize) {
        self.strongest.resize(slots, None);
        self.resizes += 1;
    }
}
