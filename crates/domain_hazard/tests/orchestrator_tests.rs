//! Tests for the lookup orchestrator, driven through mock ports

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;
use tokio::sync::watch;

use core_kernel::{Coordinate, DomainPort, HealthCheckResult, HealthCheckable};
use domain_hazard::orchestrator::{
    ADDRESS_LOOKUP_FAILED, ADDRESS_REQUIRED, NO_COORDINATES, SERVER_NOT_CONFIGURED, ZONE_LOOKUP_FAILED,
};
use domain_hazard::{
    GeocodePort, GeocodeResult, LookupError, LookupOrchestrator, LookupState, MockGeocodePort,
    MockZoneLookupPort, UpstreamService, ZoneResult,
};
use test_utils::{EXAMPLE_ADDRESS, HILO_X, HILO_Y, MATCHED_ADDRESS};

fn hilo() -> Coordinate {
    Coordinate::from_xy(HILO_X, HILO_Y).unwrap()
}

fn orchestrator(
    geocoder: MockGeocodePort,
    zones: MockZoneLookupPort,
) -> (LookupOrchestrator, Arc<MockGeocodePort>, Arc<MockZoneLookupPort>) {
    let geocoder = Arc::new(geocoder);
    let zones = Arc::new(zones);
    (
        LookupOrchestrator::new(geocoder.clone(), zones.clone()),
        geocoder,
        zones,
    )
}

/// Geocoder that records the published lookup state while a call is in flight
struct StateRecordingGeocoder {
    updates: watch::Receiver<LookupState>,
    observed: Mutex<Option<LookupState>>,
}

impl StateRecordingGeocoder {
    fn new(updates: watch::Receiver<LookupState>) -> Self {
        Self {
            updates,
            observed: Mutex::new(None),
        }
    }

    fn observed(&self) -> Option<LookupState> {
        self.observed.lock().unwrap().clone()
    }
}

impl DomainPort for StateRecordingGeocoder {}

#[async_trait]
impl HealthCheckable for StateRecordingGeocoder {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("state-recording-geocoder")
    }
}

#[async_trait]
impl GeocodePort for StateRecordingGeocoder {
    async fn geocode(&self, _address: &str) -> Result<GeocodeResult, LookupError> {
        let current = self.updates.borrow().clone();
        *self.observed.lock().unwrap() = Some(current);
        Err(LookupError::NotFound)
    }
}

// ============================================================================
// Success Path Tests
// ============================================================================

mod success_tests {
    use super::*;

    #[tokio::test]
    async fn test_address_in_zone_one() {
        let (orchestrator, geocoder, zones) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::returning(Some("1"), Some("Zone 1"), Some("Kilauea")),
        );

        let state = orchestrator.lookup(EXAMPLE_ADDRESS).await;

        assert_eq!(
            state,
            LookupState::success(ZoneResult {
                matched_address: Some(MATCHED_ADDRESS.to_string()),
                zone_id: Some("1".to_string()),
                description: Some("Zone 1".to_string()),
                volcano: Some("Kilauea".to_string()),
            })
        );
        assert_eq!(geocoder.calls(), 1);
        assert_eq!(zones.calls(), 1);
    }

    #[tokio::test]
    async fn test_outside_every_zone_is_success() {
        let (orchestrator, _, _) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        let state = orchestrator.lookup(EXAMPLE_ADDRESS).await;

        assert_eq!(
            state,
            LookupState::success(ZoneResult {
                matched_address: Some(MATCHED_ADDRESS.to_string()),
                zone_id: None,
                description: None,
                volcano: None,
            })
        );
        assert!(state.error_message().is_none());
    }

    #[tokio::test]
    async fn test_zone_lookup_receives_geocoded_point_and_address() {
        let (orchestrator, geocoder, zones) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        orchestrator.lookup(&format!("  {}  ", EXAMPLE_ADDRESS)).await;

        assert_eq!(geocoder.addresses().await, vec![EXAMPLE_ADDRESS.to_string()]);

        let requests = zones.requests().await;
        assert_eq!(requests.len(), 1);
        let (point, matched) = &requests[0];
        assert_eq!(point.lat, HILO_Y);
        assert_eq!(point.lng, HILO_X);
        assert_eq!(matched.as_deref(), Some(MATCHED_ADDRESS));
    }

    #[tokio::test]
    async fn test_loading_is_published_while_geocoding() {
        let (tx, rx) = watch::channel(LookupState::Idle);
        let geocoder = Arc::new(StateRecordingGeocoder::new(rx));
        let orchestrator = LookupOrchestrator::new(
            geocoder.clone(),
            Arc::new(MockZoneLookupPort::outside_mapped_zones()),
        );

        let final_state = orchestrator.lookup_with_updates(EXAMPLE_ADDRESS, &tx).await;

        assert_eq!(geocoder.observed(), Some(LookupState::Loading));
        assert_eq!(final_state, LookupState::error(NO_COORDINATES));
        assert_eq!(*tx.borrow(), final_state);
    }

    #[tokio::test]
    async fn test_updates_end_with_final_state() {
        let (orchestrator, _, _) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::returning(Some("1"), Some("Zone 1"), Some("Kilauea")),
        );
        let (tx, mut rx) = watch::channel(LookupState::Idle);
        assert_eq!(*rx.borrow_and_update(), LookupState::Idle);

        let final_state = orchestrator.lookup_with_updates(EXAMPLE_ADDRESS, &tx).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), final_state);
        assert!(final_state.is_finished());
    }
}

// ============================================================================
// Failure Mapping Tests
// ============================================================================

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_address_makes_no_calls() {
        let (orchestrator, geocoder, zones) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        assert_eq!(orchestrator.lookup("").await, LookupState::error(ADDRESS_REQUIRED));
        assert_eq!(orchestrator.lookup("   \t").await, LookupState::error(ADDRESS_REQUIRED));
        assert_eq!(geocoder.calls(), 0);
        assert_eq!(zones.calls(), 0);
    }

    #[tokio::test]
    async fn test_geocoder_upstream_failure() {
        let (orchestrator, _, zones) = orchestrator(
            MockGeocodePort::failing(LookupError::upstream_status(UpstreamService::Geocoder, 503, "HTTP 503")),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        assert_eq!(
            orchestrator.lookup(EXAMPLE_ADDRESS).await,
            LookupState::error(ADDRESS_LOOKUP_FAILED)
        );
        assert_eq!(zones.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let (orchestrator, _, zones) = orchestrator(
            MockGeocodePort::failing(LookupError::NotFound),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        assert_eq!(orchestrator.lookup(EXAMPLE_ADDRESS).await, LookupState::error(NO_COORDINATES));
        assert_eq!(zones.calls(), 0);
    }

    #[tokio::test]
    async fn test_match_without_location() {
        let (orchestrator, _, zones) = orchestrator(
            MockGeocodePort::returning(GeocodeResult::new(MATCHED_ADDRESS, Some(80.0), None)),
            MockZoneLookupPort::outside_mapped_zones(),
        );

        assert_eq!(orchestrator.lookup(EXAMPLE_ADDRESS).await, LookupState::error(NO_COORDINATES));
        assert_eq!(zones.calls(), 0);
    }

    #[tokio::test]
    async fn test_zone_lookup_failure() {
        let (orchestrator, geocoder, zones) = orchestrator(
            MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
            MockZoneLookupPort::failing(LookupError::upstream_status(UpstreamService::HazardZones, 500, "HTTP 500")),
        );

        assert_eq!(
            orchestrator.lookup(EXAMPLE_ADDRESS).await,
            LookupState::error(ZONE_LOOKUP_FAILED)
        );
        assert_eq!(geocoder.calls(), 1);
        assert_eq!(zones.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_configuration() {
        let (orchestrator, _, zones) = orchestrator(
            MockGeocodePort::failing(LookupError::Configuration),
            MockZoneLookupPort::failing(LookupError::Configuration),
        );

        let state = orchestrator.lookup(EXAMPLE_ADDRESS).await;

        assert_eq!(state, LookupState::error(SERVER_NOT_CONFIGURED));
        assert_ne!(state, LookupState::error(ADDRESS_LOOKUP_FAILED));
        assert_eq!(zones.calls(), 0);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn prop_whitespace_input_never_calls_upstream(input in "[ \t\r\n]{0,16}") {
            let (orchestrator, geocoder, zones) = orchestrator(
                MockGeocodePort::matching(MATCHED_ADDRESS, hilo()),
                MockZoneLookupPort::outside_mapped_zones(),
            );

            let state = runtime().block_on(orchestrator.lookup(&input));

            prop_assert_eq!(state, LookupState::error(ADDRESS_REQUIRED));
            prop_assert_eq!(geocoder.calls(), 0);
            prop_assert_eq!(zones.calls(), 0);
        }

        #[test]
        fn prop_zone_lookup_only_after_located_match(
            address in "[A-Za-z0-9 ,]{1,40}",
            located in any::<bool>(),
        ) {
            prop_assume!(!address.trim().is_empty());
            let location = if located { Some(hilo()) } else { None };
            let (orchestrator, _, zones) = orchestrator(
                MockGeocodePort::returning(GeocodeResult::new(MATCHED_ADDRESS, None, location)),
                MockZoneLookupPort::outside_mapped_zones(),
            );

            let state = runtime().block_on(orchestrator.lookup(&address));

            prop_assert_eq!(zones.calls(), usize::from(located));
            prop_assert_eq!(state.result().is_some(), located);
        }
    }
}
