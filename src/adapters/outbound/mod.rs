mod hickory_domain_resolver;
mod ip_api_geo_provider;
mod sqlite_history_repository;
mod system_domain_resolver;

pub use hickory_domain_resolver::HickoryDomainResolver;
pub use ip_api_geo_provider::IpApiGeoProvider;
pub use sqlite_history_repository::SqliteHistoryRepository;
pub use system_domain_resolver::SystemDomainResolver;
