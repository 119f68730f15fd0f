//! Geolocation Provider Port
//!
//! Defines the interface for enriching IP addresses with geographic data.

use crate::domain::entities::GeoLocation;
use async_trait::async_trait;

/// Provider of geographic information for an IP address.
///
/// This is an outbound port that abstracts the geolocation source.
/// Geolocation is enrichment, not a correctness-critical input: the
/// contract is infallible, and implementations degrade to the
/// all-"Unknown" record on any upstream failure instead of erroring.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Best-effort geographic record for the given IP address.
    async fn locate(&self, ip_address: &str) -> GeoLocation;
}
