//! Upstream service credentials

use serde::Deserialize;
use std::fmt;

use crate::error::CoreError;

/// API key for the hosted GIS services
///
/// The key is only readable through [`ApiKey::expose`]; `Debug` and `Display`
/// print a redacted placeholder so it cannot leak into logs or responses.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a key from a raw value. Blank values are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::configuration("API key is blank"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the raw key for attaching to outbound requests
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ApiKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
