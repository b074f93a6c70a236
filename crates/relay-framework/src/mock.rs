//! # Mock Framework & Testing Guide
//!
//! `MockClient<H>` hands out a real [`QueueClient<H>`] whose requests are
//! answered from a list of scripted expectations instead of a running
//! [`QueueActor`](crate::QueueActor). Use it to test code that sits *around*
//! a client (shells, domain client wrappers) without building a handler.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (spawns a task) |
//! | **State** | None (expectations) | Real queue and handler |
//! | **Use Case** | Logic around the client | The handler itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs a closed actor |
//!
//! ```rust
//! use relay_framework::mock::MockClient;
//! use relay_framework::{Envelope, MessageHandler};
//!
//! struct Echo;
//! impl MessageHandler for Echo {
//!     type Message = String;
//!     type Reply = String;
//!     fn handle(&mut self, envelope: &Envelope<String>) -> String {
//!         envelope.payload.clone()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Echo>::new();
//!     mock.expect_submit().return_ok(false);
//!
//!     let client = mock.client();
//!     assert!(!client.submit("ignored".to_string()).await.unwrap());
//!     mock.verify();
//! }
//! ```
//!
//! `Inspect` probes cannot be scripted: the mock has no handler to run them
//! against, so an inspect request fails with `ActorDropped`.

use crate::client::QueueClient;
use crate::error::FrameworkError;
use crate::handler::MessageHandler;
use crate::message::{QueueRequest, QueueStatus};
use crate::queue::Envelope;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<H: MessageHandler> {
    Submit {
        response: Result<bool, FrameworkError>,
    },
    DrainOne {
        response: Result<Option<H::Reply>, FrameworkError>,
    },
    Status {
        response: Result<QueueStatus, FrameworkError>,
    },
    History {
        response: Result<Vec<Envelope<H::Message>>, FrameworkError>,
    },
}

type Expectations<H> = Arc<Mutex<VecDeque<Expectation<H>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Submitted payloads are recorded and can be read back with
/// [`MockClient::submitted`].
pub struct MockClient<H: MessageHandler> {
    client: QueueClient<H>,
    expectations: Expectations<H>,
    submitted: Arc<Mutex<Vec<H::Message>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<H: MessageHandler> Default for MockClient<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MessageHandler> MockClient<H> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<QueueRequest<H>>(100);
        let expectations: Expectations<H> = Arc::new(Mutex::new(VecDeque::new()));
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let submitted_clone = submitted.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        QueueRequest::Submit {
                            message,
                            respond_to,
                        },
                        Some(Expectation::Submit { response }),
                    ) => {
                        submitted_clone.lock().unwrap().push(message);
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::DrainOne { respond_to },
                        Some(Expectation::DrainOne { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::Status { respond_to },
                        Some(Expectation::Status { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        QueueRequest::History { respond_to },
                        Some(Expectation::History { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::Inspect { .. }, expectation) => {
                        // Dropping the probe drops its reply channel.
                        if let Some(expectation) = expectation {
                            expectations_clone.lock().unwrap().push_front(expectation);
                        }
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: QueueClient::new(sender),
            expectations,
            submitted,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> QueueClient<H> {
        self.client.clone()
    }

    /// Expects a `submit` request.
    pub fn expect_submit(&mut self) -> ExpectationBuilder<H, bool> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Submit { response }
        })
    }

    /// Expects a `drain_one` request.
    pub fn expect_drain(&mut self) -> ExpectationBuilder<H, Option<H::Reply>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::DrainOne { response }
        })
    }

    /// Expects a `status` request.
    pub fn expect_status(&mut self) -> ExpectationBuilder<H, QueueStatus> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Status { response }
        })
    }

    /// Expects a `history` request.
    pub fn expect_history(&mut self) -> ExpectationBuilder<H, Vec<Envelope<H::Message>>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::History { response }
        })
    }

    /// Payloads received by scripted `submit` expectations, in order.
    pub fn submitted(&self) -> Vec<H::Message> {
        self.submitted.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<H: MessageHandler, T> {
    expectations: Expectations<H>,
    wrap: fn(Result<T, FrameworkError>) -> Expectation<H>,
}

impl<H: MessageHandler, T> ExpectationBuilder<H, T> {
    fn new(
        expectations: Expectations<H>,
        wrap: fn(Result<T, FrameworkError>) -> Expectation<H>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the raw receiver its requests arrive on.
///
/// Tests answer each request by hand through the `respond_to` channel. Use
/// [`MockClient`] for the fluent API.
pub fn create_mock_client<H: MessageHandler>(
    buffer_size: usize,
) -> (QueueClient<H>, mpsc::Receiver<QueueRequest<H>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueueClient::new(sender), receiver)
}

/// Helper to verify that the next request is a Submit.
pub async fn expect_submit<H: MessageHandler>(
    receiver: &mut mpsc::Receiver<QueueRequest<H>>,
) -> Option<(
    H::Message,
    tokio::sync::oneshot::Sender<Result<bool, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(QueueRequest::Submit {
            message,
            respond_to,
        }) => Some((message, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a DrainOne.
pub async fn expect_drain<H: MessageHandler>(
    receiver: &mut mpsc::Receiver<QueueRequest<H>>,
) -> Option<tokio::sync::oneshot::Sender<Result<Option<H::Reply>, FrameworkError>>> {
    match receiver.recv().await {
        Some(QueueRequest::DrainOne { respond_to }) => Some(respond_to),
        _ => None,
    }
}
