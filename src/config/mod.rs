//! Configuration management for the configuration service
//!
//! This module handles loading and managing server, logging and
//! initial power limit settings.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
