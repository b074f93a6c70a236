use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Star rating with one decimal place, stored in tenths (`42` is 4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(50);

    /// Clamps to 0.0..=5.0.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX.0))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tenths() / 10, self.tenths() % 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestaurantStatus {
    Open,
    Closed,
}

impl Display for RestaurantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        })
    }
}

/// A catalog entry. Restaurants are seeded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub name: String,
    /// Item names in menu order.
    pub menu: Vec<String>,
    pub status: RestaurantStatus,
    pub rating: Rating,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        menu: &[&str],
        status: RestaurantStatus,
        rating: Rating,
    ) -> Self {
        Self {
            name: name.into(),
            menu: menu.iter().map(|item| item.to_string()).collect(),
            status,
            rating,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == RestaurantStatus::Open
    }
}
