//! Error handling for the configuration service
//!
//! Process-level errors live in [`types`], per-request HTTP errors in [`api`].

pub mod api;
pub mod types;

pub use api::ApiError;
pub use types::{Error, Result};
