//! Hickory Domain Resolver
//!
//! Implements DomainResolver by querying nameservers directly with
//! hickory-resolver, which exposes the real answer TTL.

use crate::domain::entities::Resolution;
use crate::domain::errors::ResolveError;
use crate::domain::ports::{DomainResolver, DEFAULT_TTL_SECS};
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;

/// Rich resolver backed by hickory-resolver.
///
/// Uses the system's default nameserver configuration. The first A/AAAA
/// answer wins; its TTL is carried into the resolution.
pub struct HickoryDomainResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryDomainResolver {
    /// Create a resolver with a bounded per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl DomainResolver for HickoryDomainResolver {
    async fn resolve(&self, domain: &str) -> Result<Resolution, ResolveError> {
        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| ResolveError(e.to_string()))?;

        let ip = lookup
            .iter()
            .next()
            .ok_or_else(|| ResolveError(format!("no address records found for {domain}")))?;

        let ttl = lookup
            .as_lookup()
            .record_iter()
            .next()
            .map(|record| record.ttl())
            .unwrap_or(DEFAULT_TTL_SECS);

        Ok(Resolution {
            ip_address: ip.to_string(),
            ttl,
        })
    }
}
