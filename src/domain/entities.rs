//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the dnslens domain.
//! They have no external dependencies and contain only business logic.

use serde::{Deserialize, Serialize};

/// Outcome of resolving a domain name to an address.
///
/// Both fields are always present together: a resolver that cannot
/// produce an address reports a failure instead of a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// First resolved address, rendered as a string
    pub ip_address: String,
    /// Answer TTL in seconds (a fixed default when the resolver
    /// cannot observe the real one)
    pub ttl: u32,
}

/// Geographic information for an IP address.
///
/// Every field defaults to "Unknown" when the upstream provider
/// cannot supply it. A geolocation lookup never fails outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoLocation {
    /// Country name (e.g. "United States")
    pub country: String,
    /// City name
    pub city: String,
    /// Region or state name
    pub region: String,
    /// Network owner / organization
    pub isp: String,
}

impl GeoLocation {
    /// The all-"Unknown" record returned when enrichment is unavailable.
    pub fn unknown() -> Self {
        Self {
            country: "Unknown".to_string(),
            city: "Unknown".to_string(),
            region: "Unknown".to_string(),
            isp: "Unknown".to_string(),
        }
    }
}

/// A single completed lookup - the unit of persistence and response.
///
/// Records are created once by the lookup service, appended to the
/// history store, and read back verbatim. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRecord {
    /// Normalized domain name (lowercase, protocol and path stripped)
    pub domain: String,
    /// Resolved IP address
    pub ip_address: String,
    /// Answer TTL in seconds
    pub ttl: u32,
    /// Country name, "Unknown" when unavailable
    pub country: String,
    /// City name, "Unknown" when unavailable
    pub city: String,
    /// Region name, "Unknown" when unavailable
    pub region: String,
    /// Network owner, "Unknown" when unavailable
    pub isp: String,
    /// Wall-clock time of the lookup, `%Y-%m-%d %H:%M:%S` (UTC),
    /// stamped at response assembly rather than at the database write
    pub lookup_time: String,
}

impl LookupRecord {
    /// Assemble a record from a resolution and its geo enrichment.
    pub fn assemble(
        domain: String,
        resolution: Resolution,
        location: GeoLocation,
        lookup_time: String,
    ) -> Self {
        Self {
            domain,
            ip_address: resolution.ip_address,
            ttl: resolution.ttl,
            country: location.country,
            city: location.city,
            region: location.region,
            isp: location.isp,
            lookup_time,
        }
    }
}
