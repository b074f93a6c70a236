//! Runtime configuration of the relay.

use serde::Deserialize;
use thiserror::Error;

/// Settings for one [`RelaySystem`](super::RelaySystem).
///
/// Missing fields fall back to [`Default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Messages the queue holds before rejecting submissions.
    pub capacity: usize,
    /// Number of the first seeded order.
    pub first_order_number: u32,
    /// Restaurant a customer's `NEW` order goes to.
    pub default_restaurant: String,
    /// The single item of a `NEW` order.
    pub default_item: String,
    /// Drain one message right after every accepted submission.
    pub auto_process: bool,
    /// Request channel size between clients and the actor.
    pub channel_buffer: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            first_order_number: 1000,
            default_restaurant: "Domino's".to_string(),
            default_item: "Pizza".to_string(),
            auto_process: true,
            channel_buffer: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Queue capacity must be at least 1")]
    ZeroCapacity,
    #[error("Default restaurant cannot be empty")]
    EmptyRestaurant,
    #[error("Default item cannot be empty")]
    EmptyItem,
    #[error("Channel buffer must be at least 1")]
    ZeroChannelBuffer,
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.default_restaurant.trim().is_empty() {
            return Err(ConfigError::EmptyRestaurant);
        }
        if self.default_item.trim().is_empty() {
            return Err(ConfigError::EmptyItem);
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(())
    }
}
