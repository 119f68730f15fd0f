//! Domain Errors - Lookup failure taxonomy
//!
//! Validation and resolution failures are user-correctable and reported
//! at the HTTP boundary. Geolocation and persistence failures are
//! absorbed by their components and never appear here.

use thiserror::Error;

/// Failure reported by a resolver adapter.
///
/// Carries a human-readable message (NXDOMAIN, timeout, unreachable
/// nameserver, ...). Resolution errors never escape as raw faults.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ResolveError(pub String);

/// Errors a lookup can surface to the caller.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The domain was empty after normalization
    #[error("Domain name is required")]
    Validation,

    /// The resolver could not produce an address for the domain
    #[error("DNS lookup failed: {message}")]
    Resolution {
        /// Normalized domain the failure applies to
        domain: String,
        /// Message passed through from the resolver
        message: String,
    },

    /// Anything unanticipated
    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}
