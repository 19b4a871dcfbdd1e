//! Ports and Adapters Infrastructure
//!
//! Foundational types for the hexagonal layout used by the domain crate.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        LookupOrchestrator (use case)          │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │    Port traits (GeocodePort, ZoneLookupPort)  │
//! └──────────────────────────────────────────────┘
//!            ▲                          ▲
//!   ┌────────┴─────────┐      ┌─────────┴────────┐
//!   │  ArcGIS adapters │      │   Mock adapters  │
//!   │   (reqwest)      │      │   (tests)        │
//!   └──────────────────┘      └──────────────────┘
//! ```
//!
//! Each domain port trait extends the marker traits defined here so that
//! every adapter is thread-safe and can report its health.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            message: None,
            checked_at: Utc::now(),
        }
    }

    pub fn unhealthy(adapter_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            message: Some(message.into()),
            checked_at: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == AdapterHealth::Healthy
    }
}

/// Trait for adapters that support health checks
///
/// Health checks must be cheap and must not call the upstream service.
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
