//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the lava zone checker test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canned ArcGIS response payloads and sample inputs
//! - `upstream`: An in-process fake of both ArcGIS endpoints
//!
//! Must not depend on any workspace crate; every crate lists it as a
//! dev-dependency.

pub mod fixtures;
pub mod upstream;

pub use fixtures::*;
pub use upstream::FakeArcGis;
