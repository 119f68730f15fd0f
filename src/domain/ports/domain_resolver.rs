//! Domain Resolver Port
//!
//! Defines the interface for resolving domain names to IP addresses.

use crate::domain::entities::Resolution;
use crate::domain::errors::ResolveError;
use async_trait::async_trait;

/// TTL substituted when the resolution mechanism cannot observe the
/// real answer TTL.
pub const DEFAULT_TTL_SECS: u32 = 300;

/// Resolver for domain name to IP address.
///
/// This is an outbound port that abstracts DNS resolution.
/// Implementations may query nameservers directly (and report the real
/// answer TTL) or delegate to the operating system (and substitute
/// [`DEFAULT_TTL_SECS`]).
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Resolve a domain name to its first address.
    ///
    /// Any resolution error (NXDOMAIN, timeout, unreachable nameserver,
    /// malformed name) is reported as a `ResolveError` with a
    /// human-readable message, never as a panic.
    async fn resolve(&self, domain: &str) -> Result<Resolution, ResolveError>;
}
