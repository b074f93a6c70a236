use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for delivery partners (`DP001`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartnerId(pub String);

impl Display for PartnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Available,
    Busy,
}

impl Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
        })
    }
}

/// A courier. Seeded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryPartner {
    pub id: PartnerId,
    pub name: String,
    pub availability: Availability,
}

impl DeliveryPartner {
    pub fn new(id: impl Into<String>, name: impl Into<String>, availability: Availability) -> Self {
        Self {
            id: PartnerId(id.into()),
            name: name.into(),
            availability,
        }
    }
}
