//! Version information

/// Crate version as published in Cargo.toml
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
