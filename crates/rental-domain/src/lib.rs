//! Domain layer - car records and the fleet registry

pub mod model;
pub mod service;
