//! Shared configuration store
//!
//! Holds the peak-shaving power limits in memory behind a single
//! reader-writer lock.

pub mod config_store;

pub use config_store::{ConfigStore, PowerLimits, PowerSetting};
