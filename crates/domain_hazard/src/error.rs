//! Lookup domain errors
//!
//! Every failure the two upstream clients can produce. The orchestrator and
//! the HTTP layer map these onto fixed user-facing messages; the detail kept
//! here is for server-side logs only.

use std::fmt;
use thiserror::Error;

use core_kernel::CoreError;

/// Which upstream service a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    /// ArcGIS World geocoder
    Geocoder,
    /// Hawaiʻi lava-flow hazard zone feature service
    HazardZones,
}

impl UpstreamService {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamService::Geocoder => "geocoder",
            UpstreamService::HazardZones => "hazard_zones",
        }
    }
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while geocoding an address or querying hazard zones
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The upstream API key was not configured
    #[error("ArcGIS API key is not configured")]
    Configuration,

    /// The caller supplied unusable input
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The upstream service failed or answered with something unusable
    #[error("Upstream {service} failure (status {status:?}): {message}")]
    Upstream {
        service: UpstreamService,
        status: Option<u16>,
        message: String,
    },

    /// The geocoder succeeded but produced no candidate
    #[error("No match found for address")]
    NotFound,
}

impl LookupError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        LookupError::Validation(message.into())
    }

    /// Creates an Upstream error for a non-success HTTP status
    pub fn upstream_status(service: UpstreamService, status: u16, message: impl Into<String>) -> Self {
        LookupError::Upstream {
            service,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates an Upstream error with no HTTP status (transport or decode failure)
    pub fn upstream(service: UpstreamService, message: impl Into<String>) -> Self {
        LookupError::Upstream {
            service,
            status: None,
            message: message.into(),
        }
    }

    /// Status code reported by the upstream service, if any
    pub fn upstream_status_code(&self) -> Option<u16> {
        match self {
            LookupError::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<CoreError> for LookupError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => LookupError::Validation(msg),
            CoreError::Configuration(_) => LookupError::Configuration,
        }
    }
}
