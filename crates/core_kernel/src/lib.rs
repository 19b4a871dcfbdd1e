//! Core Kernel - Foundational types shared by the lava zone checker
//!
//! This crate provides the building blocks used by the domain and API layers:
//! - Geographic coordinates in WGS84 decimal degrees
//! - Redacted credentials for upstream services
//! - Port marker traits and adapter health reporting

pub mod geo;
pub mod credentials;
pub mod ports;
pub mod error;

pub use geo::{Coordinate, WGS84_WKID};
pub use credentials::ApiKey;
pub use ports::{DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
pub use error::CoreError;
