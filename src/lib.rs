//! dnslens Library
//!
//! This module exposes the dnslens components for use in integration
//! tests and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::LookupService;
pub use config::load_config;
pub use domain::entities::{GeoLocation, LookupRecord, Resolution};
pub use domain::errors::{LookupError, ResolveError};
pub use domain::ports::{DomainResolver, GeoProvider, HistoryRepository};
