use super::{ConfigError, RelayConfig};
use crate::clients::{RelayClient, RelayError};
use crate::order_store::{OrderError, OrderStore};
use crate::processor::CommandProcessor;
use relay_framework::QueueActor;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::info;

/// Why a relay could not start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to seed order store: {0}")]
    Seed(#[from] OrderError),
}

/// A running relay: one actor task and the client that talks to it.
///
/// Must be created inside a tokio runtime.
pub struct RelaySystem {
    pub client: RelayClient,
    pub config: RelayConfig,
    handle: JoinHandle<()>,
}

impl RelaySystem {
    pub fn new(config: RelayConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let store = OrderStore::seeded(config.first_order_number)?;
        let processor = CommandProcessor::new(
            store,
            config.default_restaurant.clone(),
            config.default_item.clone(),
        );
        let (actor, client) = QueueActor::new(processor, config.capacity, config.channel_buffer);
        let handle = tokio::spawn(actor.run());

        info!(
            capacity = config.capacity,
            first_order = config.first_order_number,
            "Relay started"
        );
        Ok(Self {
            client: RelayClient::new(client),
            config,
            handle,
        })
    }

    /// Drops the client and waits for the actor to finish.
    pub async fn shutdown(self) -> Result<(), RelayError> {
        info!("Shutting down relay");
        drop(self.client);
        self.handle
            .await
            .map_err(|e| RelayError::ActorCommunicationError(e.to_string()))?;
        info!("Relay stopped");
        Ok(())
    }
}
