//! Application layer - configuration, rendering and the interactive shell

pub mod config;
pub mod report;
pub mod shell;
