//! # Command Processor
//!
//! Turns one dequeued [`ChatMessage`] into a response line. The role picks
//! the grammar:
//!
//! | Role | Content | Effect |
//! |------|---------|--------|
//! | Customer | `NEW` (any case) | create an order at the default restaurant |
//! | Customer | an order id | show the order |
//! | Restaurant | an order id | mark it Prepared |
//! | Delivery Partner | an order id | mark it Delivered |
//!
//! Parsing is separate from execution: [`Command::parse`] is pure, and
//! [`CommandProcessor::process`] applies a command to the owned
//! [`OrderStore`] and returns an [`Outcome`] whose `Display` is the text the
//! user sees.

use crate::model::{ChatMessage, DeliveryStatus, Order, OrderId, PrepStatus, Role};
use crate::order_store::{OrderError, OrderStore};
use relay_framework::{Envelope, MessageHandler};
use std::fmt::{self, Display};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// What a message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewOrder,
    Lookup(String),
    MarkPrepared(String),
    MarkDelivered(String),
}

impl Command {
    /// Order ids are kept as typed; they are normalized on execution.
    pub fn parse(message: &ChatMessage) -> Self {
        let content = message.content.trim();
        match message.role {
            Role::Customer if content.eq_ignore_ascii_case("NEW") => Self::NewOrder,
            Role::Customer => Self::Lookup(content.to_string()),
            Role::Restaurant => Self::MarkPrepared(content.to_string()),
            Role::DeliveryPartner => Self::MarkDelivered(content.to_string()),
        }
    }
}

/// The result of a command that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(OrderId),
    Details(Order),
    Prepared(OrderId),
    Delivered(OrderId),
    /// A customer looked up an id that does not exist.
    NotFound,
    /// A status update named an id that does not exist.
    InvalidOrderId,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(id) => write!(f, "New order created: {id}"),
            Self::Details(order) => write!(
                f,
                "Order {} Details:\nRestaurant: {}\nStatus: {}\nDelivery: {}\nItems: {}",
                order.id,
                order.restaurant,
                order.status,
                order.delivery_status,
                order.items.join(", ")
            ),
            Self::Prepared(id) => write!(f, "Order {id} marked as Prepared"),
            Self::Delivered(id) => write!(f, "Order {id} marked as Delivered"),
            Self::NotFound => f.write_str("Order not found"),
            Self::InvalidOrderId => f.write_str("Invalid order ID"),
        }
    }
}

/// A failure while executing a command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Store(#[from] OrderError),
}

/// Interprets messages against an order store it owns.
pub struct CommandProcessor {
    store: OrderStore,
    default_restaurant: String,
    default_item: String,
}

impl CommandProcessor {
    /// `NEW` orders go to `default_restaurant` with the single item `default_item`.
    pub fn new(
        store: OrderStore,
        default_restaurant: impl Into<String>,
        default_item: impl Into<String>,
    ) -> Self {
        Self {
            store,
            default_restaurant: default_restaurant.into(),
            default_item: default_item.into(),
        }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    #[instrument(skip(self), fields(role = %message.role))]
    pub fn process(&mut self, message: &ChatMessage) -> Result<Outcome, ProcessError> {
        let command = Command::parse(message);
        debug!(?command, "Parsed message");

        let outcome = match command {
            Command::NewOrder => {
                let id = self.store.create_order(
                    &self.default_restaurant,
                    vec![self.default_item.clone()],
                )?;
                info!(order_id = %id, "Order created");
                Outcome::Created(id)
            }
            Command::Lookup(raw) => match self.store.get_order_details(&raw) {
                Some(order) => Outcome::Details(order.clone()),
                None => {
                    debug!(id = %raw, "Lookup missed");
                    Outcome::NotFound
                }
            },
            Command::MarkPrepared(raw) => {
                match self.store.update_order_status(&raw, PrepStatus::Prepared)? {
                    Some(id) => {
                        info!(order_id = %id, "Order prepared");
                        Outcome::Prepared(id)
                    }
                    None => {
                        warn!(id = %raw, "Prepared update for unknown order");
                        Outcome::InvalidOrderId
                    }
                }
            }
            Command::MarkDelivered(raw) => {
                match self.store.update_delivery_status(&raw, DeliveryStatus::Delivered)? {
                    Some(id) => {
                        info!(order_id = %id, "Order delivered");
                        Outcome::Delivered(id)
                    }
                    None => {
                        warn!(id = %raw, "Delivery update for unknown order");
                        Outcome::InvalidOrderId
                    }
                }
            }
        };
        Ok(outcome)
    }

    /// Processes `message` and renders the result, folding failures into
    /// `Error processing request: ...`.
    pub fn respond(&mut self, message: &ChatMessage) -> String {
        match self.process(message) {
            Ok(outcome) => outcome.to_string(),
            Err(e) => {
                warn!(error = %e, "Request failed");
                format!("Error processing request: {e}")
            }
        }
    }
}

impl MessageHandler for CommandProcessor {
    type Message = ChatMessage;
    type Reply = String;

    fn handle(&mut self, envelope: &Envelope<ChatMessage>) -> String {
        self.respond(&envelope.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> CommandProcessor {
        CommandProcessor::new(OrderStore::seeded(1000).unwrap(), "Domino's", "Pizza")
    }

    fn customer(text: &str) -> ChatMessage {
        ChatMessage::new(Role::Customer, text)
    }

    #[test]
    fn test_parse_by_role() {
        assert_eq!(Command::parse(&customer("  new ")), Command::NewOrder);
        assert_eq!(Command::parse(&customer("1000")), Command::Lookup("1000".into()));
        assert_eq!(
            Command::parse(&ChatMessage::new(Role::Restaurant, "NEW")),
            Command::MarkPrepared("NEW".into())
        );
        assert_eq!(
            Command::parse(&ChatMessage::new(Role::DeliveryPartner, " ORDER#1001 ")),
            Command::MarkDelivered("ORDER#1001".into())
        );
    }

    #[test]
    fn test_new_order_response() {
        let mut processor = processor();
        assert_eq!(processor.respond(&customer("NEW")), "New order created: ORDER#1003");
        assert_eq!(processor.respond(&customer("new")), "New order created: ORDER#1004");

        let order = processor.store().get_order_details("1004").unwrap();
        assert_eq!(order.restaurant, "Domino's");
        assert_eq!(order.items, ["Pizza"]);
    }

    #[test]
    fn test_details_response() {
        let mut processor = processor();
        assert_eq!(
            processor.respond(&customer("1000")),
            "Order ORDER#1000 Details:\n\
             Restaurant: Domino's\n\
             Status: Received\n\
             Delivery: Pending\n\
             Items: Pizza, Garlic Bread"
        );
        let by_token = processor.respond(&customer("ORDER#1000"));
        assert_eq!(by_token, processor.respond(&customer("1000")));
        assert_eq!(processor.respond(&customer("ORDER#9999")), "Order not found");
        assert_eq!(processor.respond(&customer("")), "Order not found");
    }

    #[test]
    fn test_restaurant_marks_prepared() {
        let mut processor = processor();
        let reply = processor.respond(&ChatMessage::new(Role::Restaurant, "order#1000"));
        assert_eq!(reply, "Order ORDER#1000 marked as Prepared");
        let order = processor.store().get_order_details("1000").unwrap();
        assert_eq!(order.status, PrepStatus::Prepared);
        assert_eq!(order.delivery_status, DeliveryStatus::Pending);
    }

    #[test]
    fn test_partner_marks_delivered() {
        let mut processor = processor();
        let reply = processor.respond(&ChatMessage::new(Role::DeliveryPartner, "1000"));
        assert_eq!(reply, "Order ORDER#1000 marked as Delivered");
        let order = processor.store().get_order_details("1000").unwrap();
        // Delivery does not touch the preparation status.
        assert_eq!(order.status, PrepStatus::Received);
        assert_eq!(order.delivery_status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_unknown_id_on_update_leaves_store_unchanged() {
        let mut processor = processor();
        let before: Vec<Order> = processor.store().orders().cloned().collect();

        let reply = processor.respond(&ChatMessage::new(Role::Restaurant, "ORDER#9999"));
        assert_eq!(reply, "Invalid order ID");
        let reply = processor.respond(&ChatMessage::new(Role::DeliveryPartner, "soon please"));
        assert_eq!(reply, "Invalid order ID");

        let after: Vec<Order> = processor.store().orders().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_failure_becomes_error_response() {
        let mut processor =
            CommandProcessor::new(OrderStore::seeded(1000).unwrap(), "Pizza Hut", "Pizza");
        assert_eq!(
            processor.process(&customer("NEW")),
            Err(ProcessError::Store(OrderError::UnknownRestaurant("Pizza Hut".into())))
        );
        assert_eq!(
            processor.respond(&customer("NEW")),
            "Error processing request: Unknown restaurant: Pizza Hut"
        );
        // The processor keeps serving after a failure.
        assert_eq!(processor.respond(&customer("9999")), "Order not found");
    }

    #[test]
    fn test_handler_replies_with_response_text() {
        let mut processor = processor();
        let envelope = Envelope::new(customer("NEW"));
        assert_eq!(processor.handle(&envelope), "New order created: ORDER#1003");
    }

    #[test]
    fn test_update_reply_uses_store_normalized_id() {
        let mut processor = processor();
        let reply = processor.respond(&ChatMessage::new(Role::Restaurant, " order#01001 "));
        assert_eq!(reply, "Order ORDER#1001 marked as Prepared");
        let reply = processor.respond(&ChatMessage::new(Role::DeliveryPartner, "001002"));
        assert_eq!(reply, "Order ORDER#1002 marked as Delivered");
    }
}
