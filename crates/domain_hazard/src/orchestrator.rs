//! Lookup Orchestrator
//!
//! Runs the address → coordinate → hazard zone pipeline. Each step returns a
//! `Result`, and [`LookupFailure::message`] is the single table that turns a
//! failure into the text shown to the end user. Upstream detail only reaches
//! the logs.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use core_kernel::Coordinate;

use crate::error::LookupError;
use crate::ports::{GeocodePort, ZoneLookupPort};
use crate::state::LookupState;
use crate::zone::ZoneResult;

pub const ADDRESS_REQUIRED: &str = "Address is required.";
pub const SERVER_NOT_CONFIGURED: &str = "Server not configured.";
pub const ADDRESS_LOOKUP_FAILED: &str = "Address lookup failed. Double-check the address.";
pub const NO_COORDINATES: &str = "No coordinates returned for that address.";
pub const ZONE_LOOKUP_FAILED: &str = "Could not retrieve lava zone information.";

/// Why a lookup ended in the error state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// Input was empty or whitespace
    AddressRequired,
    /// The upstream API key is missing
    NotConfigured,
    /// The geocoder failed
    GeocodeFailed,
    /// The geocoder found nothing usable
    NoCoordinates,
    /// The hazard zone query failed
    ZoneLookupFailed,
}

impl LookupFailure {
    /// User-facing message for this failure
    pub fn message(self) -> &'static str {
        match self {
            LookupFailure::AddressRequired => ADDRESS_REQUIRED,
            LookupFailure::NotConfigured => SERVER_NOT_CONFIGURED,
            LookupFailure::GeocodeFailed => ADDRESS_LOOKUP_FAILED,
            LookupFailure::NoCoordinates => NO_COORDINATES,
            LookupFailure::ZoneLookupFailed => ZONE_LOOKUP_FAILED,
        }
    }

    fn from_geocode(err: &LookupError) -> Self {
        match err {
            LookupError::Configuration => LookupFailure::NotConfigured,
            LookupError::NotFound => LookupFailure::NoCoordinates,
            LookupError::Validation(_) | LookupError::Upstream { .. } => LookupFailure::GeocodeFailed,
        }
    }

    fn from_zone_lookup(err: &LookupError) -> Self {
        match err {
            LookupError::Configuration => LookupFailure::NotConfigured,
            _ => LookupFailure::ZoneLookupFailed,
        }
    }
}

/// Returns the trimmed address, or fails if nothing is left
pub fn validate_address(raw: &str) -> Result<&str, LookupFailure> {
    let address = raw.trim();
    if address.is_empty() {
        Err(LookupFailure::AddressRequired)
    } else {
        Ok(address)
    }
}

/// Sequences the geocoder and the zone lookup for one address
///
/// Holds no per-request state; clones share the same adapters and may run
/// concurrently.
#[derive(Clone)]
pub struct LookupOrchestrator {
    geocoder: Arc<dyn GeocodePort>,
    zones: Arc<dyn ZoneLookupPort>,
}

impl LookupOrchestrator {
    pub fn new(geocoder: Arc<dyn GeocodePort>, zones: Arc<dyn ZoneLookupPort>) -> Self {
        Self { geocoder, zones }
    }

    /// Looks up the hazard zone for a raw, user-typed address
    ///
    /// Never returns `Idle` or `Loading`. A success whose zone fields are all
    /// null means the address is outside every mapped zone.
    pub async fn lookup(&self, raw_address: &str) -> LookupState {
        debug!("Lookup started");

        match self.run(raw_address).await {
            Ok(result) => {
                info!(
                    zone = result.zone_id.as_deref().unwrap_or("none"),
                    "Lookup succeeded"
                );
                LookupState::success(result)
            }
            Err(failure) => LookupState::error(failure.message()),
        }
    }

    /// Like [`lookup`](Self::lookup), but publishes `Loading` and then the
    /// final state on `updates`
    pub async fn lookup_with_updates(
        &self,
        raw_address: &str,
        updates: &watch::Sender<LookupState>,
    ) -> LookupState {
        updates.send_replace(LookupState::Loading);
        let state = self.lookup(raw_address).await;
        updates.send_replace(state.clone());
        state
    }

    async fn run(&self, raw_address: &str) -> Result<ZoneResult, LookupFailure> {
        let address = validate_address(raw_address).inspect_err(|_| {
            debug!("Rejected blank address");
        })?;
        let (point, matched_address) = self.resolve(address).await?;
        self.classify(point, matched_address).await
    }

    /// Step 1: address → coordinate
    async fn resolve(&self, address: &str) -> Result<(Coordinate, String), LookupFailure> {
        let geocoded = self.geocoder.geocode(address).await.map_err(|err| {
            let failure = LookupFailure::from_geocode(&err);
            warn!(error = %err, ?failure, "Geocoding step failed");
            failure
        })?;

        match geocoded.location {
            Some(point) => Ok((point, geocoded.matched_address)),
            None => {
                warn!("Geocoder match carried no location");
                Err(LookupFailure::NoCoordinates)
            }
        }
    }

    /// Step 2: coordinate → hazard zone
    async fn classify(&self, point: Coordinate, matched_address: String) -> Result<ZoneResult, LookupFailure> {
        self.zones
            .lookup_zone(point, Some(matched_address))
            .await
            .map_err(|err| {
                let failure = LookupFailure::from_zone_lookup(&err);
                warn!(error = %err, point = %point, ?failure, "Zone lookup step failed");
                failure
            })
    }
}
