//! Response type definitions
//!
//! Defines the body returned by the get endpoints.

use serde::{Deserialize, Serialize};

/// Body of a get response: `{"value": <float>}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueResponse {
    /// Current value of the setting
    pub value: f64,
}

impl ValueResponse {
    /// Create a new get response
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Encode the response as JSON
    ///
    /// JSON has no representation for NaN or infinities, so a non-finite
    /// value is refused instead of being written out as `null`.
    pub fn to_json(&self) -> Result<Vec<u8>, String> {
        if !self.value.is_finite() {
            return Err(format!("{} has no JSON representation", self.value));
        }
        serde_json::to_vec(self).map_err(|e| e.to_string())
    }
}
