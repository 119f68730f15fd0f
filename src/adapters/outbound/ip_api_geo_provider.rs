//! IP-API Geolocation Provider
//!
//! Implements GeoProvider against an ipapi.co-style HTTP endpoint.
//! The endpoint URL is a template with an `{ip}` placeholder.

use crate::domain::entities::GeoLocation;
use crate::domain::ports::GeoProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Payload subset of the geolocation API response.
///
/// Every field is optional; whatever the provider omits degrades to
/// "Unknown" in the mapped record.
#[derive(Debug, Deserialize)]
struct GeoApiResponse {
    country_name: Option<String>,
    city: Option<String>,
    region: Option<String>,
    org: Option<String>,
}

impl From<GeoApiResponse> for GeoLocation {
    fn from(body: GeoApiResponse) -> Self {
        let or_unknown = |field: Option<String>| field.unwrap_or_else(|| "Unknown".to_string());
        Self {
            country: or_unknown(body.country_name),
            city: or_unknown(body.city),
            region: or_unknown(body.region),
            isp: or_unknown(body.org),
        }
    }
}

/// Geolocation provider querying a remote HTTP API, unauthenticated.
///
/// All failure modes (non-200 status, timeout, network error, malformed
/// body) degrade to the all-"Unknown" record; the underlying cause is
/// only surfaced as a log diagnostic.
pub struct IpApiGeoProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiGeoProvider {
    /// Create a provider for an endpoint template such as
    /// `https://ipapi.co/{ip}/json/`.
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    fn url_for(&self, ip_address: &str) -> String {
        self.endpoint.replace("{ip}", ip_address)
    }

    async fn fetch(&self, ip_address: &str) -> anyhow::Result<GeoLocation> {
        let response = self.client.get(self.url_for(ip_address)).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("geolocation service returned {}", response.status());
        }

        let body: GeoApiResponse = response.json().await?;
        Ok(body.into())
    }
}

#[async_trait]
impl GeoProvider for IpApiGeoProvider {
    async fn locate(&self, ip_address: &str) -> GeoLocation {
        match self.fetch(ip_address).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("geolocation lookup failed for {}: {:#}", ip_address, e);
                GeoLocation::unknown()
            }
        }
    }
}
