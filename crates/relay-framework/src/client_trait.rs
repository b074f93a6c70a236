//! # ActorClient Trait
//!
//! Provides a common interface for domain-specific clients, adding default
//! `status` and `history` methods built on top of a generic `QueueClient`.
use crate::{Envelope, FrameworkError, MessageHandler, QueueClient, QueueStatus};
use async_trait::async_trait;

/// Trait for domain clients to inherit the read-only queue queries.
///
/// # Example
///
/// ```rust
/// use relay_framework::{ActorClient, Envelope, FrameworkError, MessageHandler, QueueClient};
///
/// struct Echo;
/// impl MessageHandler for Echo {
///     type Message = String;
///     type Reply = String;
///     fn handle(&mut self, envelope: &Envelope<String>) -> String {
///         envelope.payload.clone()
///     }
/// }
///
/// #[derive(Debug)]
/// struct EchoError(String);
/// impl From<String> for EchoError {
///     fn from(s: String) -> Self { EchoError(s) }
/// }
///
/// struct EchoClient {
///     inner: QueueClient<Echo>,
/// }
///
/// impl ActorClient<Echo> for EchoClient {
///     type Error = EchoError;
///
///     fn inner(&self) -> &QueueClient<Echo> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         EchoError(e.to_string())
///     }
/// }
///
/// async fn usage(client: EchoClient) {
///     // status() and history() are provided automatically
///     let _ = client.status().await;
///     let _ = client.history().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<H: MessageHandler>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic QueueClient.
    fn inner(&self) -> &QueueClient<H>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Current depth, capacity and processed count.
    #[tracing::instrument(skip(self))]
    async fn status(&self) -> Result<QueueStatus, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().status().await.map_err(Self::map_error)
    }

    /// Snapshot of every processed message.
    #[tracing::instrument(skip(self))]
    async fn history(&self) -> Result<Vec<Envelope<H::Message>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().history().await.map_err(Self::map_error)
    }
}
