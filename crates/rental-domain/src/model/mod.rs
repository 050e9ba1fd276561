//! Domain model types

pub mod car;
pub mod rental;

pub use car::Car;
pub use rental::Rental;
