//! Lookup Domain Ports
//!
//! Port interfaces for the two upstream services, so the orchestrator can be
//! driven by the real ArcGIS adapters in production and by in-memory mocks in
//! tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_hazard::ports::{GeocodePort, ZoneLookupPort};
//! use std::sync::Arc;
//!
//! pub struct LookupOrchestrator {
//!     geocoder: Arc<dyn GeocodePort>,
//!     zones: Arc<dyn ZoneLookupPort>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{Coordinate, DomainPort, HealthCheckable};

use crate::error::LookupError;
use crate::geocode::GeocodeResult;
use crate::zone::ZoneResult;

/// Converts a free-text address into its best-match coordinate
///
/// Implementations make at most one outbound call per invocation and never
/// retry. A missing API key must fail with [`LookupError::Configuration`]
/// before any network activity.
#[async_trait]
pub trait GeocodePort: DomainPort + HealthCheckable {
    /// Geocodes a single-line address
    ///
    /// # Returns
    ///
    /// The first upstream candidate, [`LookupError::NotFound`] when there are
    /// none, or [`LookupError::Upstream`] when the service fails.
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, LookupError>;
}

/// Finds the hazard zone covering a point
#[async_trait]
pub trait ZoneLookupPort: DomainPort + HealthCheckable {
    /// Queries the hazard-zone layer at `point`
    ///
    /// `matched_address` is echoed into the result unchanged. A point outside
    /// every mapped zone yields a result with null zone fields, not an error.
    async fn lookup_zone(
        &self,
        point: Coordinate,
        matched_address: Option<String>,
    ) -> Result<ZoneResult, LookupError>;
}

/// Mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::HealthCheckResult;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// Geocoder that returns a fixed outcome and records every address it sees
    #[derive(Debug)]
    pub struct MockGeocodePort {
        outcome: Result<GeocodeResult, LookupError>,
        calls: AtomicUsize,
        addresses: RwLock<Vec<String>>,
    }

    impl MockGeocodePort {
        /// Always answers with `result`
        pub fn returning(result: GeocodeResult) -> Self {
            Self::with_outcome(Ok(result))
        }

        /// Always fails with `error`
        pub fn failing(error: LookupError) -> Self {
            Self::with_outcome(Err(error))
        }

        /// Answers with a full match at `location`
        pub fn matching(matched_address: impl Into<String>, location: Coordinate) -> Self {
            Self::returning(GeocodeResult::new(matched_address, Some(100.0), Some(location)))
        }

        fn with_outcome(outcome: Result<GeocodeResult, LookupError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                addresses: RwLock::new(Vec::new()),
            }
        }

        /// Number of times `geocode` was invoked
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Addresses received, oldest first
        pub async fn addresses(&self) -> Vec<String> {
            self.addresses.read().await.clone()
        }
    }

    impl DomainPort for MockGeocodePort {}

    #[async_trait]
    impl HealthCheckable for MockGeocodePort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-geocoder")
        }
    }

    #[async_trait]
    impl GeocodePort for MockGeocodePort {
        async fn geocode(&self, address: &str) -> Result<GeocodeResult, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.addresses.write().await.push(address.to_string());
            self.outcome.clone()
        }
    }

    /// Zone lookup that returns fixed attributes and records every request
    #[derive(Debug)]
    pub struct MockZoneLookupPort {
        outcome: Result<ZoneResult, LookupError>,
        calls: AtomicUsize,
        requests: RwLock<Vec<(Coordinate, Option<String>)>>,
    }

    impl MockZoneLookupPort {
        /// Answers with the given zone attributes; `matched_address` is
        /// always taken from the request, as the real adapter does
        pub fn returning(zone_id: Option<&str>, description: Option<&str>, volcano: Option<&str>) -> Self {
            Self::with_outcome(Ok(ZoneResult {
                matched_address: None,
                zone_id: zone_id.map(str::to_string),
                description: description.map(str::to_string),
                volcano: volcano.map(str::to_string),
            }))
        }

        /// Answers as if the point is outside every mapped zone
        pub fn outside_mapped_zones() -> Self {
            Self::with_outcome(Ok(ZoneResult::default()))
        }

        /// Always fails with `error`
        pub fn failing(error: LookupError) -> Self {
            Self::with_outcome(Err(error))
        }

        fn with_outcome(outcome: Result<ZoneResult, LookupError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                requests: RwLock::new(Vec::new()),
            }
        }

        /// Number of times `lookup_zone` was invoked
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Requests received, oldest first
        pub async fn requests(&self) -> Vec<(Coordinate, Option<String>)> {
            self.requests.read().await.clone()
        }
    }

    impl DomainPort for MockZoneLookupPort {}

    #[async_trait]
    impl HealthCheckable for MockZoneLookupPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-zone-lookup")
        }
    }

    #[async_trait]
    impl ZoneLookupPort for MockZoneLookupPort {
        async fn lookup_zone(
            &self,
            point: Coordinate,
            matched_address: Option<String>,
        ) -> Result<ZoneResult, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.write().await.push((point, matched_address.clone()));
            self.outcome.clone().map(|result| ZoneResult {
                matched_address,
                ..result
            })
        }
    }
}
