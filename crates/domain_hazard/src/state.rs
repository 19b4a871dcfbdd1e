//! Lookup lifecycle state

use serde::{Deserialize, Serialize};

use crate::zone::ZoneResult;

/// The single current state of an address lookup
///
/// Serialized with a `status` tag:
/// `{"status":"error","message":"…"}` or `{"status":"success","result":{…}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupState {
    /// Nothing has been submitted yet
    #[default]
    Idle,
    /// A lookup is in flight
    Loading,
    /// The lookup failed; `message` is safe to show to the end user
    Error { message: String },
    /// The lookup completed, possibly with no hazard zone at the point
    Success { result: ZoneResult },
}

impl LookupState {
    pub fn error(message: impl Into<String>) -> Self {
        LookupState::Error {
            message: message.into(),
        }
    }

    pub fn success(result: ZoneResult) -> Self {
        LookupState::Success { result }
    }

    /// Returns true once the lookup has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        matches!(self, LookupState::Error { .. } | LookupState::Success { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LookupState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&ZoneResult> {
        match self {
            LookupState::Success { result } => Some(result),
            _ => None,
        }
    }
}
