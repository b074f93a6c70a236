//! # Relay Client
//!
//! Provides a high-level API for talking to the relay actor. It wraps a
//! `QueueClient<CommandProcessor>` and speaks in roles and text instead of
//! queue requests.
use crate::model::{ChatMessage, DeliveryPartner, Order, Restaurant, Role};
use crate::processor::CommandProcessor;
use async_trait::async_trait;
use relay_framework::{ActorClient, FrameworkError, QueueClient};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Transport failures only. A full queue, an empty queue and an unknown
/// order are ordinary return values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelayError {
    #[error("Relay unavailable: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RelayError {
    fn from(msg: String) -> Self {
        RelayError::ActorCommunicationError(msg)
    }
}

/// Client for the relay actor.
#[derive(Clone)]
pub struct RelayClient {
    inner: QueueClient<CommandProcessor>,
}

#[async_trait]
impl ActorClient<CommandProcessor> for RelayClient {
    type Error = RelayError;

    fn inner(&self) -> &QueueClient<CommandProcessor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RelayError::ActorCommunicationError(e.to_string())
    }
}

impl RelayClient {
    pub fn new(inner: QueueClient<CommandProcessor>) -> Self {
        Self { inner }
    }

    /// Enqueues `text` as `role`. `Ok(false)` means the queue was full.
    #[instrument(skip(self))]
    pub async fn submit(&self, role: Role, text: &str) -> Result<bool, RelayError> {
        debug!("Sending request");
        let accepted = self
            .inner
            .submit(ChatMessage::new(role, text))
            .await
            .map_err(Self::map_error)?;
        if !accepted {
            warn!("Queue full, message rejected");
        }
        Ok(accepted)
    }

    /// Processes the head message. `Ok(None)` means there was nothing to do.
    #[instrument(skip(self))]
    pub async fn drain_one(&self) -> Result<Option<String>, RelayError> {
        debug!("Sending request");
        self.inner.drain_one().await.map_err(Self::map_error)
    }

    /// Submits and then drains once.
    ///
    /// The drain handles the head of the queue, which is this message only
    /// when nothing was waiting before it. `Ok(None)` means the submission
    /// was rejected.
    #[instrument(skip(self))]
    pub async fn send(&self, role: Role, text: &str) -> Result<Option<String>, RelayError> {
        if !self.submit(role, text).await? {
            return Ok(None);
        }
        self.drain_one().await
    }

    pub async fn queue_depth(&self) -> Result<usize, RelayError> {
        Ok(self.status().await?.depth)
    }

    pub async fn history_length(&self) -> Result<usize, RelayError> {
        Ok(self.status().await?.processed)
    }

    /// Looks an order up by any accepted spelling of its id.
    #[instrument(skip(self))]
    pub async fn order(&self, id: &str) -> Result<Option<Order>, RelayError> {
        let id = id.to_string();
        self.inner
            .inspect(move |processor| processor.store().get_order_details(&id).cloned())
            .await
            .map_err(Self::map_error)
    }

    /// Every order, in issuance order.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, RelayError> {
        self.inner
            .inspect(|processor| processor.store().orders().cloned().collect())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, RelayError> {
        self.inner
            .inspect(|processor| processor.store().restaurants().cloned().collect())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn partners(&self) -> Result<Vec<DeliveryPartner>, RelayError> {
        self.inner
            .inspect(|processor| processor.store().partners().cloned().collect())
            .await
            .map_err(Self::map_error)
    }
}
