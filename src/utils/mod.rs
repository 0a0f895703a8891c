//! Utility functions and helpers

pub mod version;

pub use version::get_version;
