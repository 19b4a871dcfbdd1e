//! Full lookup DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use domain_hazard::LookupState;

/// Body of `POST /lookup`
#[derive(Debug, Default, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub address: Option<Value>,
}

impl LookupRequest {
    /// Raw address text; anything that is not a string counts as empty
    pub fn raw_address(&self) -> &str {
        self.address.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

/// Final lookup state plus its plain-text rendering
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    #[serde(flatten)]
    pub state: LookupState,
    pub summary: String,
}

impl From<LookupState> for LookupResponse {
    fn from(state: LookupState) -> Self {
        let summary = state.to_string();
        Self { state, summary }
    }
}
