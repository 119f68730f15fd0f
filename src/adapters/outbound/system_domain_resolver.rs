//! System Domain Resolver
//!
//! Implements DomainResolver via the operating system's resolver.
//! The OS interface does not expose answer TTLs, so lookups carry the
//! fixed default TTL instead.

use crate::domain::entities::Resolution;
use crate::domain::errors::ResolveError;
use crate::domain::ports::{DomainResolver, DEFAULT_TTL_SECS};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;

/// Basic resolver backed by `getaddrinfo` through tokio.
///
/// Degraded-fidelity fallback for environments where direct nameserver
/// queries are unavailable or undesired: addresses still resolve, TTL
/// becomes [`DEFAULT_TTL_SECS`].
pub struct SystemDomainResolver {
    timeout: Duration,
}

impl SystemDomainResolver {
    /// Create a resolver with a bounded overall timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DomainResolver for SystemDomainResolver {
    async fn resolve(&self, domain: &str) -> Result<Resolution, ResolveError> {
        let mut addrs = tokio::time::timeout(self.timeout, lookup_host((domain, 0u16)))
            .await
            .map_err(|_| {
                ResolveError(format!(
                    "resolution of {domain} timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ResolveError(e.to_string()))?;

        let ip = addrs
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| ResolveError(format!("no addresses found for {domain}")))?;

        Ok(Resolution {
            ip_address: ip.to_string(),
            ttl: DEFAULT_TTL_SECS,
        })
    }
}
