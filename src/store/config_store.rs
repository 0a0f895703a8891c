//! In-memory power limit store
//!
//! Both limits live in one [`PowerLimits`] record guarded by a single
//! [`RwLock`]. Readers share the lock, a writer holds it exclusively, and the
//! guard never outlives one field access.

use crate::config::settings::PeakShavingSettings;
use std::fmt;
use tokio::sync::RwLock;

/// Default minimal power in kW
pub const DEFAULT_MINIMAL_POWER: f64 = -15.0;

/// Default maximal power in kvar
pub const DEFAULT_MAXIMAL_POWER: f64 = 30.0;

/// One of the two settings held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSetting {
    /// Lower power threshold
    MinimalPower,
    /// Upper power threshold
    MaximalPower,
}

impl PowerSetting {
    /// Every setting, in route registration order
    pub const ALL: [PowerSetting; 2] = [PowerSetting::MinimalPower, PowerSetting::MaximalPower];

    /// Key used in endpoint paths
    pub fn key(self) -> &'static str {
        match self {
            PowerSetting::MinimalPower => "minimalPower",
            PowerSetting::MaximalPower => "maximalPower",
        }
    }

    /// Human readable name for log lines
    pub fn label(self) -> &'static str {
        match self {
            PowerSetting::MinimalPower => "Minimal Power",
            PowerSetting::MaximalPower => "Maximal Power",
        }
    }

    /// Unit the value is reported in
    pub fn unit(self) -> &'static str {
        match self {
            PowerSetting::MinimalPower => "kW",
            PowerSetting::MaximalPower => "kvar",
        }
    }
}

impl fmt::Display for PowerSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The guarded record
///
/// No ordering between the two limits is enforced; `minimal_power` may
/// exceed `maximal_power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLimits {
    pub minimal_power: f64,
    pub maximal_power: f64,
}

impl PowerLimits {
    /// Read one field
    pub fn value(&self, setting: PowerSetting) -> f64 {
        match setting {
            PowerSetting::MinimalPower => self.minimal_power,
            PowerSetting::MaximalPower => self.maximal_power,
        }
    }

    fn value_mut(&mut self, setting: PowerSetting) -> &mut f64 {
        match setting {
            PowerSetting::MinimalPower => &mut self.minimal_power,
            PowerSetting::MaximalPower => &mut self.maximal_power,
        }
    }
}

impl Default for PowerLimits {
    fn default() -> Self {
        Self {
            minimal_power: DEFAULT_MINIMAL_POWER,
            maximal_power: DEFAULT_MAXIMAL_POWER,
        }
    }
}

/// Thread-safe store for the peak-shaving power limits
///
/// Construct one per process (or per test) and share it through an `Arc`.
#[derive(Debug, Default)]
pub struct ConfigStore {
    limits: RwLock<PowerLimits>,
}

impl ConfigStore {
    /// Create a store holding the default limits (-15 kW and 30 kvar)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with explicit initial limits
    pub fn with_limits(limits: PowerLimits) -> Self {
        Self {
            limits: RwLock::new(limits),
        }
    }

    /// Create a store seeded from the `[peakshaving]` settings section
    pub fn from_settings(settings: &PeakShavingSettings) -> Self {
        Self::with_limits(PowerLimits {
            minimal_power: settings.minimal_power,
            maximal_power: settings.maximal_power,
        })
    }

    /// Current value of `setting`
    pub async fn get(&self, setting: PowerSetting) -> f64 {
        self.limits.read().await.value(setting)
    }

    /// Overwrite `setting` with `value`
    ///
    /// Any `f64` is accepted, including NaN and infinities.
    pub async fn set(&self, setting: PowerSetting, value: f64) {
        let mut limits = self.limits.write().await;
        *limits.value_mut(setting) = value;
    }

    /// Both limits read under one lock acquisition
    pub async fn snapshot(&self) -> PowerLimits {
        *self.limits.read().await
    }
}
