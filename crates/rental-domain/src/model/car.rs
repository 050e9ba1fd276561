//! Car record held by the fleet registry

use rental_types::CarId;
use serde::{Deserialize, Serialize};

/// A rentable car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub model_name: String,
    pub price_per_day: f64,
    available: bool,
}

impl Car {
    /// New cars are always available
    pub fn new(id: CarId, model_name: impl Into<String>, price_per_day: f64) -> Self {
        Self {
            id,
            model_name: model_name.into(),
            price_per_day,
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Display label for the availability flag
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Rented"
        }
    }

    pub(crate) fn mark_rented(&mut self) {
        self.available = false;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.available = true;
    }
}
