//! Domain services

pub mod fleet;

pub use fleet::{FleetListing, FleetRegistry};
