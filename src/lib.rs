//! Peak-Shaving Configuration Service
//!
//! A small HTTP service holding the two power limits of a peak-shaving
//! controller, "minimal power" and "maximal power", in memory.
//!
//! # Architecture
//!
//! - **Store**: [`ConfigStore`] keeps both limits behind one reader-writer lock
//! - **Server**: an Axum router exposing a GET and a POST endpoint per limit,
//!   wrapped in permissive CORS headers
//!
//! Nothing is persisted; every start begins from the configured initial
//! values (-15 and 30 unless overridden).
//!
//! # Usage
//!
//! ```bash
//! peakshaving-server --port 6080 --host 0.0.0.0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use peakshaving_config::{ConfigStore, PowerSetting};
//!
//! # async fn example() {
//! let store = ConfigStore::new();
//! store.set(PowerSetting::MaximalPower, 42.5).await;
//! assert_eq!(store.get(PowerSetting::MaximalPower).await, 42.5);
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{ApiError, Error, Result};
pub use store::{ConfigStore, PowerLimits, PowerSetting};
pub use types::{ValueRequest, ValueResponse};
