//! dnslens - DNS lookup service with geolocation enrichment
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;

use crate::adapters::inbound::ApiServer;
use crate::adapters::outbound::{
    HickoryDomainResolver, IpApiGeoProvider, SqliteHistoryRepository, SystemDomainResolver,
};
use crate::application::LookupService;
use crate::config::{load_config, ResolverStrategy};
use crate::domain::ports::{DomainResolver, GeoProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting dnslens listen={} resolver={} db={}",
        cfg.listen_addr,
        cfg.resolver_strategy.as_str(),
        cfg.db_path
    );

    // ===== COMPOSITION ROOT =====
    // Wire up all adapters and services

    // 1. Create outbound adapters

    // Domain resolver - the strategy is fixed here, at startup
    let resolver_timeout = Duration::from_secs(cfg.resolver_timeout_secs);
    let resolver: Arc<dyn DomainResolver> = match cfg.resolver_strategy {
        ResolverStrategy::Rich => Arc::new(HickoryDomainResolver::new(resolver_timeout)),
        ResolverStrategy::Basic => Arc::new(SystemDomainResolver::new(resolver_timeout)),
    };

    // Geolocation provider (remote HTTP API)
    let geo_provider: Arc<dyn GeoProvider> = Arc::new(IpApiGeoProvider::new(
        cfg.geo_api_url.clone(),
        Duration::from_secs(cfg.geo_timeout_secs),
    )?);

    // History store (SQLite), schema created up front so a bad path
    // fails at startup instead of on the first lookup
    let history = Arc::new(SqliteHistoryRepository::new(cfg.db_path.clone()));
    history.init().await?;

    // 2. Create application service
    let lookups = Arc::new(LookupService::new(resolver, geo_provider, history));

    // 3. Create inbound adapter and run
    let server = ApiServer::new(cfg.listen_addr.clone(), lookups);

    server.run().await
}
