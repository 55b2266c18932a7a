//! Configuration for the Signal Registry Subsystem

use crate::domain::catalog::{
    MAX_FREQUENCY_CHANNELS, RESERVED_SIGNAL_VALUES, SIGNAL_OVERFLOW_BASE,
};
use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};

/// Registry configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Signal identity values set aside for custom content, in push order
    pub reserved_signal_values: Vec<u32>,
    /// First value handed out once the reserved stack is empty
    pub signal_overflow_base: u32,
    /// Maximum frequency channels, built-ins included
    pub frequency_cap: u32,
    /// Added to the source radius when a signal has no detection radius
    pub detection_radius_padding: f32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reserved_signal_values: RESERVED_SIGNAL_VALUES.to_vec(),
            signal_overflow_base: SIGNAL_OVERFLOW_BASE,
            frequency_cap: MAX_FREQUENCY_CHANNELS,
            detection_radius_padding: 30.0,
        }
    }
}

impl RegistryConfig {
    /// Check the limits before a pool is built from this config.
    ///
    /// # Errors
    /// - `InvalidConfig` if the cap exceeds the 31 flags a channel may use
    /// - `InvalidConfig` if a reserved value collides with the overflow range
    /// - `InvalidConfig` if the overflow base leaves no room to count upwards
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.frequency_cap > MAX_FREQUENCY_CHANNELS {
            return Err(RegistryError::InvalidConfig(format!(
                "frequency_cap {} exceeds {} usable flags",
                self.frequency_cap, MAX_FREQUENCY_CHANNELS
            )));
        }

        if self.signal_overflow_base == u32::MAX {
            return Err(RegistryError::InvalidConfig(
                "signal_overflow_base leaves no overflow range".into(),
            ));
        }

        if let Some(v) = self
            .reserved_signal_values
            .iter()
            .find(|v| **v >= self.signal_overflow_base)
        {
            return Err(RegistryError::InvalidConfig(format!(
                "reserved signal value {} overlaps overflow range starting at {}",
                v, self.signal_overflow_base
            )));
        }

        Ok(())
    }
}
