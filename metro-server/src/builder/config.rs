//! Travel time configuration for network construction.

use chrono::Duration;

/// Fixed travel times applied when building a network from route definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Travel time between adjacent stations on the same line (minutes).
    pub hop_mins: u32,

    /// Cost of changing lines along a transfer connection (minutes).
    pub transfer_mins: u32,
}

impl NetworkConfig {
    /// Create a new configuration with the given times.
    pub fn new(hop_mins: u32, transfer_mins: u32) -> Self {
        Self {
            hop_mins,
            transfer_mins,
        }
    }

    /// Returns the hop time as a Duration.
    pub fn hop(&self) -> Duration {
        Duration::minutes(i64::from(self.hop_mins))
    }

    /// Returns the transfer time as a Duration.
    pub fn transfer(&self) -> Duration {
        Duration::minutes(i64::from(self.transfer_mins))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hop_mins: 3,
            transfer_mins: 4,
        }
    }
}
