//! Request type definitions
//!
//! Defines the body accepted by the set endpoints.

use serde::{Deserialize, de::Error as _};
use serde_json::{Map, Value};

/// Key carrying the new value
pub const VALUE_KEY: &str = "value";

/// Body of a set request: `{"value": <float>}`
///
/// The key is matched without regard to case (`value`, `Value`, `VALUE`),
/// preferring an exact match when several are present. Other keys are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRequest {
    /// New value for the setting
    pub value: f64,
}

impl ValueRequest {
    /// Decode a raw request body
    ///
    /// The content type is not inspected; whatever arrives is parsed as JSON.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;

        let raw = object
            .get(VALUE_KEY)
            .or_else(|| {
                object
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(VALUE_KEY))
                    .map(|(_, value)| value)
            })
            .ok_or_else(|| serde_json::Error::missing_field(VALUE_KEY))?;

        Ok(Self {
            value: f64::deserialize(raw)?,
        })
    }
}
