//! Fleet registry
//!
//! Owns the cars in insertion order. Lookups are linear scans by id; the fleet
//! is small and listing order is visible to users.

use rental_types::{CarId, FleetError};
use tracing::debug;

use crate::model::{Car, Rental};

/// Result of listing the fleet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FleetListing<'a> {
    /// No cars registered
    Empty,
    /// All cars in insertion order
    Cars(&'a [Car]),
}

/// In-memory registry of cars
#[derive(Debug, Default)]
pub struct FleetRegistry {
    cars: Vec<Car>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a car, rejecting an id that is already registered
    pub fn add(&mut self, car: Car) -> Result<(), FleetError> {
        if self.cars.iter().any(|c| c.id == car.id) {
            debug!(car_id = car.id, "rejected duplicate car id");
            return Err(FleetError::DuplicateId(car.id));
        }
        debug!(car_id = car.id, model = %car.model_name, "car added");
        self.cars.push(car);
        Ok(())
    }

    /// Remove a car by id and hand it back
    pub fn remove(&mut self, id: CarId) -> Result<Car, FleetError> {
        let index = self.position(id)?;
        let car = self.cars.remove(index);
        debug!(car_id = id, "car removed");
        Ok(car)
    }

    /// Find a car by id
    pub fn find_by_id(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    /// Find all cars whose model name matches, ignoring case
    pub fn find_by_model(&self, model_name: &str) -> Vec<&Car> {
        self.cars
            .iter()
            .filter(|c| eq_ignore_case(&c.model_name, model_name))
            .collect()
    }

    /// Rent an available car for `days` days
    pub fn rent(&mut self, id: CarId, customer_name: &str, days: i32) -> Result<Rental, FleetError> {
        let car = self.get_mut(id)?;
        if !car.is_available() {
            debug!(car_id = id, "rent rejected, car already rented");
            return Err(FleetError::AlreadyRented(id));
        }
        car.mark_rented();
        let rental = Rental::new(car, customer_name, days);
        debug!(car_id = id, days, total_cost = rental.total_cost, "car rented");
        Ok(rental)
    }

    /// Return a rented car
    pub fn return_car(&mut self, id: CarId) -> Result<(), FleetError> {
        let car = self.get_mut(id)?;
        if car.is_available() {
            debug!(car_id = id, "return rejected, car already available");
            return Err(FleetError::AlreadyAvailable(id));
        }
        car.mark_returned();
        debug!(car_id = id, "car returned");
        Ok(())
    }

    /// Overwrite the daily price of a car
    pub fn update_price(&mut self, id: CarId, new_price: f64) -> Result<(), FleetError> {
        let car = self.get_mut(id)?;
        car.price_per_day = new_price;
        debug!(car_id = id, new_price, "price updated");
        Ok(())
    }

    pub fn list_all(&self) -> FleetListing<'_> {
        if self.cars.is_empty() {
            FleetListing::Empty
        } else {
            FleetListing::Cars(&self.cars)
        }
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    fn position(&self, id: CarId) -> Result<usize, FleetError> {
        self.cars
            .iter()
            .position(|c| c.id == id)
            .ok_or(FleetError::NotFound(id))
    }

    fn get_mut(&mut self, id: CarId) -> Result<&mut Car, FleetError> {
        self.cars
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(FleetError::NotFound(id))
    }
}

/// Char-by-char comparison where each pair may differ only in case
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_lowercase().eq(y.to_lowercase())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet_with_sedan() -> FleetRegistry {
        let mut fleet = FleetRegistry::new();
        fleet.add(Car::new(1, "Sedan", 50.0)).unwrap();
        fleet
    }

    #[test]
    fn test_add_then_find_is_available() {
        let fleet = fleet_with_sedan();
        let car = fleet.find_by_id(1).unwrap();
        assert!(car.is_available());
        assert_eq!(car.model_name, "Sedan");
        assert_eq!(car.price_per_day, 50.0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut fleet = fleet_with_sedan();
        let result = fleet.add(Car::new(1, "Coupe", 80.0));
        assert_eq!(result, Err(FleetError::DuplicateId(1)));
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.find_by_id(1).unwrap().model_name, "Sedan");
    }

    #[test]
    fn test_rent_computes_total_and_marks_rented() {
        let mut fleet = fleet_with_sedan();
        let rental = fleet.rent(1, "Alice", 3).unwrap();
        assert_eq!(rental.total_cost, 150.0);
        assert_eq!(rental.customer_name, "Alice");
        assert_eq!(rental.car_id, 1);
        assert_eq!(rental.model_name, "Sedan");
        assert_eq!(rental.days, 3);
        assert_eq!(rental.status_label(), "Rented");
        assert!(!fleet.find_by_id(1).unwrap().is_available());
    }

    #[test]
    fn test_rent_twice_rejected_without_side_effects() {
        let mut fleet = fleet_with_sedan();
        fleet.rent(1, "Alice", 3).unwrap();
        assert_eq!(fleet.rent(1, "Bob", 2), Err(FleetError::AlreadyRented(1)));
        assert_eq!(fleet.find_by_id(1).unwrap().price_per_day, 50.0);

        fleet.return_car(1).unwrap();
        let rental = fleet.rent(1, "Bob", 2).unwrap();
        assert_eq!(rental.total_cost, 100.0);
    }

    #[test]
    fn test_rent_does_not_validate_days() {
        let mut fleet = fleet_with_sedan();
        let rental = fleet.rent(1, "Carol", -2).unwrap();
        assert_eq!(rental.total_cost, -100.0);

        fleet.return_car(1).unwrap();
        assert_eq!(fleet.rent(1, "Carol", 0).unwrap().total_cost, 0.0);
    }

    #[test]
    fn test_rent_unknown_car() {
        let mut fleet = FleetRegistry::new();
        assert_eq!(fleet.rent(9, "Alice", 1), Err(FleetError::NotFound(9)));
    }

    #[test]
    fn test_return_flow() {
        let mut fleet = fleet_with_sedan();
        fleet.rent(1, "Alice", 3).unwrap();
        fleet.return_car(1).unwrap();
        assert!(fleet.find_by_id(1).unwrap().is_available());
        assert_eq!(fleet.return_car(1), Err(FleetError::AlreadyAvailable(1)));
        assert_eq!(fleet.return_car(2), Err(FleetError::NotFound(2)));
    }

    #[test]
    fn test_remove_after_return() {
        let mut fleet = fleet_with_sedan();
        fleet.rent(1, "Alice", 3).unwrap();
        fleet.return_car(1).unwrap();
        let removed = fleet.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert!(fleet.find_by_id(1).is_none());
        assert_eq!(fleet.remove(1), Err(FleetError::NotFound(1)));
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut fleet = FleetRegistry::new();
        for (id, model) in [(1, "A"), (2, "B"), (3, "C")] {
            fleet.add(Car::new(id, model, 10.0)).unwrap();
        }
        fleet.remove(2).unwrap();
        match fleet.list_all() {
            FleetListing::Cars(cars) => {
                let ids: Vec<_> = cars.iter().map(|c| c.id).collect();
                assert_eq!(ids, vec![1, 3]);
            }
            FleetListing::Empty => panic!("fleet should not be empty"),
        }
    }

    #[test]
    fn test_find_by_model_ignores_case_and_keeps_order() {
        let mut fleet = FleetRegistry::new();
        fleet.add(Car::new(1, "Sedan", 50.0)).unwrap();
        fleet.add(Car::new(2, "SUV", 90.0)).unwrap();
        fleet.add(Car::new(3, "SEDAN", 55.0)).unwrap();

        let found: Vec<_> = fleet.find_by_model("sedan").iter().map(|c| c.id).collect();
        assert_eq!(found, vec![1, 3]);
        assert!(fleet.find_by_model("Sed").is_empty());
    }

    #[test]
    fn test_find_by_model_folds_each_char() {
        let mut fleet = FleetRegistry::new();
        fleet.add(Car::new(1, "ΟΣ", 40.0)).unwrap();
        fleet.add(Car::new(2, "Straße", 60.0)).unwrap();

        let ids = |name: &str| -> Vec<_> { fleet.find_by_model(name).iter().map(|c| c.id).collect() };
        assert_eq!(ids("οσ"), vec![1]);
        assert_eq!(ids("ος"), vec![1]);
        assert_eq!(ids("STRASSE"), Vec::<i32>::new());
        assert_eq!(ids("STRAßE"), vec![2]);
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Sedan", "sEDAN"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("Sedan", "Sedans"));
        assert!(!eq_ignore_case("Sedan", "Sedam"));
    }

    #[test]
    fn test_update_price() {
        let mut fleet = fleet_with_sedan();
        fleet.update_price(1, -5.5).unwrap();
        assert_eq!(fleet.find_by_id(1).unwrap().price_per_day, -5.5);
        assert_eq!(fleet.update_price(2, 10.0), Err(FleetError::NotFound(2)));
    }

    #[test]
    fn test_update_price_affects_next_rental_only() {
        let mut fleet = fleet_with_sedan();
        let first = fleet.rent(1, "Alice", 2).unwrap();
        fleet.update_price(1, 70.0).unwrap();
        fleet.return_car(1).unwrap();
        let second = fleet.rent(1, "Bob", 2).unwrap();
        assert_eq!(first.total_cost, 100.0);
        assert_eq!(second.total_cost, 140.0);
    }

    #[test]
    fn test_list_all_empty_then_one() {
        let mut fleet = FleetRegistry::new();
        assert_eq!(fleet.list_all(), FleetListing::Empty);
        fleet.add(Car::new(1, "Sedan", 50.0)).unwrap();
        match fleet.list_all() {
            FleetListing::Cars(cars) => assert_eq!(cars.len(), 1),
            FleetListing::Empty => panic!("fleet should not be empty"),
        }
    }

    #[test]
    fn test_rental_serializes_fields() {
        let mut fleet = fleet_with_sedan();
        let rental = fleet.rent(1, "Alice", 3).unwrap();
        let json = serde_json::to_value(&rental).unwrap();
        assert_eq!(json["customer_name"], "Alice");
        assert_eq!(json["total_cost"], 150.0);
        assert!(json["rented_at"].is_string());
    }
}
