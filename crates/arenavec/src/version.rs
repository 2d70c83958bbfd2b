//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the patch component of the version.
#[must_use]
pub fn patch() -> u32 {
    env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0)
}

/// Get the full version string.
#[must_use]
pub fn full_version() -> String {
    format!("arenavec {}", version())
}
