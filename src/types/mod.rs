//! Type definitions for the configuration service
//!
//! Wire types exchanged with HTTP clients.

pub mod request;
pub mod response;

pub use request::ValueRequest;
pub use response::ValueResponse;
