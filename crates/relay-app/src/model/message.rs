use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The acting party of a message. Decides which command grammar applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Restaurant,
    DeliveryPartner,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Restaurant, Role::DeliveryPartner];

    /// Input hint shown when this role is selected.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Customer => "Enter Order ID or 'NEW' for new order:",
            Self::Restaurant => "Enter Order ID to update:",
            Self::DeliveryPartner => "Enter Order ID to update delivery status:",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Customer => "Customer",
            Self::Restaurant => "Restaurant",
            Self::DeliveryPartner => "Delivery Partner",
        })
    }
}

/// The role tag is not one of the three known parties.
///
/// Displays as the response the user sees for such a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid request")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable
    /// and `partner` / `delivery` are accepted for the delivery partner.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "customer" => Ok(Self::Customer),
            "restaurant" => Ok(Self::Restaurant),
            "deliverypartner" | "partner" | "delivery" => Ok(Self::DeliveryPartner),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// A role-tagged line of free text as submitted by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
