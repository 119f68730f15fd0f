mod domain_resolver;
mod geo_provider;
mod history_repository;

pub use domain_resolver::{DomainResolver, DEFAULT_TTL_SECS};
pub use geo_provider::GeoProvider;
pub use history_repository::HistoryRepository;
