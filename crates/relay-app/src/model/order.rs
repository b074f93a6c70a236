use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Textual prefix of every order id.
pub const ORDER_PREFIX: &str = "ORDER#";

/// Type-safe identifier for Orders, displayed as `ORDER#<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ORDER_PREFIX, self.0)
    }
}

/// The text could not be read as an order id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order ID: {0}")]
pub struct InvalidOrderId(pub String);

/// Accepts `ORDER#1000`, `order#1000` and the bare suffix `1000`.
/// Surrounding whitespace is ignored.
impl FromStr for OrderId {
    type Err = InvalidOrderId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..ORDER_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(ORDER_PREFIX) => &trimmed[ORDER_PREFIX.len()..],
            _ => trimmed,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidOrderId(s.to_string()));
        }
        digits
            .parse()
            .map(OrderId)
            .map_err(|_| InvalidOrderId(s.to_string()))
    }
}

/// Kitchen progress. The usual path is Received → Prepared → Delivered,
/// but any value may overwrite any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrepStatus {
    Received,
    Prepared,
    Delivered,
}

impl Display for PrepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Received => "Received",
            Self::Prepared => "Prepared",
            Self::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Delivered,
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

/// Represents a customer order.
///
/// # Relay Framework
/// This struct implements the [`Entity`](relay_framework::Entity) trait,
/// allowing it to be kept in a [`ResourceStore`](relay_framework::ResourceStore).
///
/// See [`impl Entity for Order`](#impl-Entity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant: String,
    pub items: Vec<String>,
    pub status: PrepStatus,
    pub delivery_status: DeliveryStatus,
    pub created_at: DateTime<Local>,
}

impl Order {
    /// Creates a freshly placed order: Received, delivery Pending, stamped now.
    pub fn new(id: OrderId, restaurant: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id,
            restaurant: restaurant.into(),
            items,
            status: PrepStatus::Received,
            delivery_status: DeliveryStatus::Pending,
            created_at: Local::now(),
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub restaurant: String,
    pub items: Vec<String>,
}

/// Payload for updating an order. Each variant overwrites one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderUpdate {
    Status(PrepStatus),
    Delivery(DeliveryStatus),
}
