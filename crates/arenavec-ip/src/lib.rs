//! # arenavec-ip
//!
//! Dotted-quad address values and dot-separated rendering.
//!
//! Independent of `arenavec-core`; the CLI uses both.
#![warn(missing_docs)]

pub mod address;
pub mod render;

// Re-exports
pub use address::{IpParseError, Ipv4Address};
pub use render::{print_ip, RenderIp};
