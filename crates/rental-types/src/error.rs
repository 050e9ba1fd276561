//! Error types for car-rental

use thiserror::Error;

use crate::CarId;

/// Fleet operation outcomes that leave the registry unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("Car with this ID already exists!")]
    DuplicateId(CarId),

    #[error("Car not found.")]
    NotFound(CarId),

    #[error("Car is already rented.")]
    AlreadyRented(CarId),

    #[error("Car is already available.")]
    AlreadyAvailable(CarId),
}

impl FleetError {
    /// Id of the car the failed operation targeted
    pub fn car_id(&self) -> CarId {
        match *self {
            FleetError::DuplicateId(id)
            | FleetError::NotFound(id)
            | FleetError::AlreadyRented(id)
            | FleetError::AlreadyAvailable(id) => id,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_error_messages() {
        assert_eq!(FleetError::DuplicateId(1).to_string(), "Car with this ID already exists!");
        assert_eq!(FleetError::NotFound(1).to_string(), "Car not found.");
        assert_eq!(FleetError::AlreadyRented(1).to_string(), "Car is already rented.");
        assert_eq!(FleetError::AlreadyAvailable(1).to_string(), "Car is already available.");
    }

    #[test]
    fn test_fleet_error_car_id() {
        assert_eq!(FleetError::AlreadyRented(42).car_id(), 42);
        assert_eq!(FleetError::NotFound(-3).car_id(), -3);
    }

    #[test]
    fn test_config_error_wraps_into_error() {
        let err: Error = ConfigError::NotFound.into();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
        assert_eq!(err.to_string(), "Configuration error: Configuration directory not found");
    }
}
