//! Lava Hazard Zone Domain
//!
//! This crate answers one question: which lava-flow hazard zone covers a
//! street address on the Island of Hawaiʻi? It does no geocoding or spatial
//! math itself; it orchestrates two hosted ArcGIS services.
//!
//! # Pipeline
//!
//! ```text
//! raw address ──▶ GeocodePort ──▶ Coordinate ──▶ ZoneLookupPort ──▶ ZoneResult
//!      │               │                              │
//!      ▼               ▼                              ▼
//!  "Address is     "Address lookup failed…"   "Could not retrieve lava
//!   required."     "No coordinates returned…"   zone information."
//! ```
//!
//! The [`LookupOrchestrator`] runs the two steps strictly in sequence and folds
//! every outcome into a single [`LookupState`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_hazard::{ArcGisConfig, ArcGisGeocoder, HazardZoneService, LookupOrchestrator};
//! use std::sync::Arc;
//!
//! let config = Arc::new(ArcGisConfig::default().with_api_key(key));
//! let client = config.http_client()?;
//!
//! let orchestrator = LookupOrchestrator::new(
//!     Arc::new(ArcGisGeocoder::new(config.clone(), client.clone())),
//!     Arc::new(HazardZoneService::new(config, client)),
//! );
//!
//! let state = orchestrator.lookup("1234 Example St, Hilo, HI").await;
//! println!("{state}");
//! ```

pub mod geocode;
pub mod zone;
pub mod state;
pub mod error;
pub mod ports;
pub mod adapters;
pub mod orchestrator;
pub mod report;

pub use geocode::GeocodeResult;
pub use zone::ZoneResult;
pub use state::LookupState;
pub use error::{LookupError, UpstreamService};
pub use ports::{GeocodePort, ZoneLookupPort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockGeocodePort, MockZoneLookupPort};
pub use adapters::{ArcGisConfig, ArcGisGeocoder, HazardZoneService};
pub use orchestrator::{LookupFailure, LookupOrchestrator};
