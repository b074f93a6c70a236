//! # Generic Client
//!
//! The sender half of a [`QueueActor`](crate::QueueActor).

use crate::error::FrameworkError;
use crate::handler::MessageHandler;
use crate::message::{QueueRequest, QueueStatus};
use crate::queue::Envelope;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `QueueActor`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved
/// into other tasks. Every method returns `FrameworkError::ActorClosed` if
/// the actor has stopped and `FrameworkError::ActorDropped` if it stopped
/// while the request was in flight.
pub struct QueueClient<H: MessageHandler> {
    sender: mpsc::Sender<QueueRequest<H>>,
}

impl<H: MessageHandler> Clone for QueueClient<H> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<H: MessageHandler> QueueClient<H> {
    pub fn new(sender: mpsc::Sender<QueueRequest<H>>) -> Self {
        Self { sender }
    }

    async fn request<T: Send>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, FrameworkError>>) -> QueueRequest<H> + Send,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Enqueues `message`. `Ok(false)` means the queue was full.
    pub async fn submit(&self, message: H::Message) -> Result<bool, FrameworkError> {
        self.request(|respond_to| QueueRequest::Submit {
            message,
            respond_to,
        })
        .await
    }

    /// Processes the head message. `Ok(None)` means the queue was empty.
    pub async fn drain_one(&self) -> Result<Option<H::Reply>, FrameworkError> {
        self.request(|respond_to| QueueRequest::DrainOne { respond_to })
            .await
    }

    pub async fn status(&self) -> Result<QueueStatus, FrameworkError> {
        self.request(|respond_to| QueueRequest::Status { respond_to })
            .await
    }

    pub async fn history(&self) -> Result<Vec<Envelope<H::Message>>, FrameworkError> {
        self.request(|respond_to| QueueRequest::History { respond_to })
            .await
    }

    /// Runs `probe` against the handler inside the actor task and returns
    /// its result. The probe only gets shared access.
    pub async fn inspect<R>(
        &self,
        probe: impl FnOnce(&H) -> R + Send + 'static,
    ) -> Result<R, FrameworkError>
    where
        R: Send + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        let probe = Box::new(move |handler: &H| {
            let _ = respond_to.send(probe(handler));
        });
        self.sender
            .send(QueueRequest::Inspect { probe })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}
