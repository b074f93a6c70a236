//! Demo catalog and sample orders loaded into every new store.

use crate::model::{Availability, DeliveryPartner, PrepStatus, Rating, Restaurant, RestaurantStatus};

pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            "Domino's",
            &["Pizza", "Pasta", "Garlic Bread"],
            RestaurantStatus::Open,
            Rating::from_tenths(42),
        ),
        Restaurant::new(
            "McDonald's",
            &["Burgers", "Fries", "McFlurry"],
            RestaurantStatus::Open,
            Rating::from_tenths(40),
        ),
        Restaurant::new(
            "Starbucks",
            &["Coffee", "Sandwiches", "Pastries"],
            RestaurantStatus::Open,
            Rating::from_tenths(45),
        ),
    ]
}

pub fn partners() -> Vec<DeliveryPartner> {
    vec![
        DeliveryPartner::new("DP001", "John", Availability::Available),
        DeliveryPartner::new("DP002", "Sarah", Availability::Busy),
    ]
}

/// Restaurant, items and preparation status of each sample order, in
/// issuance order. A Delivered sample is also delivered; the rest are Pending.
pub const SAMPLE_ORDERS: [(&str, &[&str], PrepStatus); 3] = [
    ("Domino's", &["Pizza", "Garlic Bread"], PrepStatus::Received),
    ("McDonald's", &["Burgers", "Fries"], PrepStatus::Prepared),
    ("Starbucks", &["Coffee", "Sandwiches"], PrepStatus::Delivered),
];
