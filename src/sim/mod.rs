//! Simulation harness helpers.

/// Binary image loading.
pub mod loader;
