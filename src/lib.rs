//! Cross-crate integration tests for the arenavec workspace.
//!
//! The tests live in `tests/`; this library is intentionally empty.
