//! Rental produced by a successful rent operation

use chrono::{DateTime, Utc};
use rental_types::CarId;
use serde::{Deserialize, Serialize};

use super::Car;

/// Snapshot of a rent: who took which car, for how long, at what cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub customer_name: String,
    pub car_id: CarId,
    pub model_name: String,
    pub price_per_day: f64,
    pub days: i32,
    pub total_cost: f64,
    pub rented_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(car: &Car, customer_name: impl Into<String>, days: i32) -> Self {
        Self {
            customer_name: customer_name.into(),
            car_id: car.id,
            model_name: car.model_name.clone(),
            price_per_day: car.price_per_day,
            days,
            total_cost: car.price_per_day * f64::from(days),
            rented_at: Utc::now(),
        }
    }

    /// Status printed on the rental slip
    pub fn status_label(&self) -> &'static str {
        "Rented"
    }
}
