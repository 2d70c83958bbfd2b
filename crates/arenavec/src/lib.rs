//! arenavec library: application logic behind the `arenavec` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
