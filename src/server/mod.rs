//! HTTP server for the configuration service
//!
//! Routes, the CORS wrapper and the request handlers.

pub mod app;
pub mod cors;
pub mod handlers;

pub use app::{AppState, create_app};
