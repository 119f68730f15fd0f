//! Application Layer
//!
//! Use cases that orchestrate domain ports.

mod lookup_service;

pub use lookup_service::LookupService;
