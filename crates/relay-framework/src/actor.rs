use crate::client::QueueClient;
use crate::handler::MessageHandler;
use crate::message::{QueueRequest, QueueStatus};
use crate::queue::BoundedQueue;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The single-writer actor that owns a bounded queue and its handler.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the queue, the handler (and
/// through it, all domain state) and the receiver end of the request
/// channel. Requests are served one at a time in [`QueueActor::run`], so the
/// queue and the handler are plain values with no `Mutex` around them.
///
/// Any number of cloned [`QueueClient`]s may talk to one actor; their
/// requests are serialized by the channel.
///
/// # Usage Pattern
///
/// 1.  **Create**: `QueueActor::new()` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: submit and drain through the client.
///
/// ```rust
/// use relay_framework::{Envelope, MessageHandler, QueueActor};
///
/// struct Upper;
///
/// impl MessageHandler for Upper {
///     type Message = String;
///     type Reply = String;
///     fn handle(&mut self, envelope: &Envelope<String>) -> String {
///         envelope.payload.to_uppercase()
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = QueueActor::new(Upper, 4, 8);
///     tokio::spawn(actor.run());
///
///     assert!(client.submit("hello".to_string()).await.unwrap());
///     assert_eq!(client.drain_one().await.unwrap().as_deref(), Some("HELLO"));
/// }
/// ```
pub struct QueueActor<H: MessageHandler> {
    receiver: mpsc::Receiver<QueueRequest<H>>,
    queue: BoundedQueue<H::Message>,
    handler: H,
}

impl<H: MessageHandler> QueueActor<H> {
    /// Creates a new `QueueActor` and its associated `QueueClient`.
    ///
    /// # Arguments
    ///
    /// * `handler` - Consumer that owns the state messages act upon.
    /// * `capacity` - Maximum number of messages waiting in the queue.
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait until there is space.
    pub fn new(handler: H, capacity: usize, buffer_size: usize) -> (Self, QueueClient<H>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            queue: BoundedQueue::new(capacity),
            handler,
        };
        (actor, QueueClient::new(sender))
    }

    fn status(&self) -> QueueStatus {
        QueueStatus {
            depth: self.queue.len(),
            capacity: self.queue.capacity(),
            processed: self.queue.history().len(),
        }
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let handler_type = std::any::type_name::<H>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(handler_type, capacity = self.queue.capacity(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                QueueRequest::Submit { message, respond_to } => {
                    debug!(handler_type, ?message, "Submit");
                    let accepted = match self.queue.enqueue(message) {
                        Ok(()) => true,
                        Err(full) => {
                            warn!(handler_type, capacity = full.capacity, "Submit rejected");
                            false
                        }
                    };
                    let _ = respond_to.send(Ok(accepted));
                }
                QueueRequest::DrainOne { respond_to } => {
                    let reply = match self.queue.dequeue() {
                        Some(envelope) => {
                            debug!(handler_type, message = ?envelope.payload, "Handling");
                            let reply = self.handler.handle(envelope);
                            info!(handler_type, depth = self.queue.len(), "Handled");
                            Some(reply)
                        }
                        None => {
                            debug!(handler_type, "Drain on empty queue");
                            None
                        }
                    };
                    let _ = respond_to.send(Ok(reply));
                }
                QueueRequest::Status { respond_to } => {
                    let _ = respond_to.send(Ok(self.status()));
                }
                QueueRequest::History { respond_to } => {
                    let _ = respond_to.send(Ok(self.queue.history().to_vec()));
                }
                QueueRequest::Inspect { probe } => {
                    probe(&self.handler);
                }
            }
        }

        let status = self.status();
        info!(
            handler_type,
            depth = status.depth,
            processed = status.processed,
            "Shutdown"
        );
    }
}
