//! Lookup Service - Main application use case
//!
//! Orchestrates the lookup-and-persist pipeline: normalizing input,
//! resolving the domain, enriching with geolocation, and appending to
//! the history log. This is the primary interface for the inbound adapter.

use crate::domain::entities::LookupRecord;
use crate::domain::errors::LookupError;
use crate::domain::ports::{DomainResolver, GeoProvider, HistoryRepository};
use crate::domain::services::domain_name;
use chrono::Utc;
use std::sync::Arc;

/// Lookup service - main application use case.
///
/// Each invocation is stateless and independent:
/// 1. Normalizes the raw domain input
/// 2. Resolves it to an address (failure stops the pipeline)
/// 3. Enriches the address with geolocation (never fails)
/// 4. Appends the assembled record to the history log (best effort)
pub struct LookupService {
    resolver: Arc<dyn DomainResolver>,
    geo_provider: Arc<dyn GeoProvider>,
    history: Arc<dyn HistoryRepository>,
}

impl LookupService {
    /// Create a new lookup service.
    pub fn new(
        resolver: Arc<dyn DomainResolver>,
        geo_provider: Arc<dyn GeoProvider>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            resolver,
            geo_provider,
            history,
        }
    }

    /// Run one lookup for raw user input.
    ///
    /// Validation and resolution failures return early; no geolocation
    /// call and no history row happen on those paths. Persistence
    /// failure degrades to a warning - the caller still gets the record.
    pub async fn lookup(&self, raw_domain: &str) -> Result<LookupRecord, LookupError> {
        let domain = domain_name::normalize(raw_domain).ok_or(LookupError::Validation)?;

        let resolution =
            self.resolver
                .resolve(&domain)
                .await
                .map_err(|e| LookupError::Resolution {
                    domain: domain.clone(),
                    message: e.to_string(),
                })?;

        tracing::debug!("resolved {} -> {} (ttl {})", domain, resolution.ip_address, resolution.ttl);

        let location = self.geo_provider.locate(&resolution.ip_address).await;

        // lookup_time reflects the lookup itself, not the database write
        let lookup_time = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let record = LookupRecord::assemble(domain, resolution, location, lookup_time);

        if !self.history.append(&record).await {
            tracing::warn!("lookup for {} completed but was not persisted", record.domain);
        }

        Ok(record)
    }

    /// The most recent lookups, newest first.
    pub async fn history(&self, limit: u32) -> anyhow::Result<Vec<LookupRecord>> {
        self.history.recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{GeoLocation, Resolution};
    use crate::domain::errors::ResolveError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockResolver {
        result: Result<Resolution, ResolveError>,
        calls: AtomicUsize,
    }

    impl MockResolver {
        fn ok(ip: &str, ttl: u32) -> Self {
            Self {
                result: Ok(Resolution {
                    ip_address: ip.to_string(),
                    ttl,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(ResolveError(message.to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DomainResolver for MockResolver {
        async fn resolve(&self, _domain: &str) -> Result<Resolution, ResolveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct MockGeoProvider {
        location: GeoLocation,
        calls: AtomicUsize,
    }

    impl MockGeoProvider {
        fn returning(location: GeoLocation) -> Self {
            Self {
                location,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GeoProvider for MockGeoProvider {
        async fn locate(&self, _ip_address: &str) -> GeoLocation {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.location.clone()
        }
    }

    struct MemoryHistory {
        records: Mutex<Vec<LookupRecord>>,
        fail_appends: bool,
    }

    impl MemoryHistory {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_appends: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail_appends: true,
            }
        }

        fn row_count(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HistoryRepository for MemoryHistory {
        async fn append(&self, record: &LookupRecord) -> bool {
            if self.fail_appends {
                return false;
            }
            self.records.lock().unwrap().push(record.clone());
            true
        }

        async fn recent(&self, limit: u32) -> anyhow::Result<Vec<LookupRecord>> {
            let records = self.records.lock().unwrap();
            Ok(records.iter().rev().take(limit as usize).cloned().collect())
        }
    }

    fn us_location() -> GeoLocation {
        GeoLocation {
            country: "United States".to_string(),
            city: "Los Angeles".to_string(),
            region: "California".to_string(),
            isp: "EdgeCast".to_string(),
        }
    }

    fn service(
        resolver: Arc<MockResolver>,
        geo: Arc<MockGeoProvider>,
        history: Arc<MemoryHistory>,
    ) -> LookupService {
        LookupService::new(resolver, geo, history)
    }

    #[tokio::test]
    async fn test_successful_lookup_assembles_record_and_persists() {
        let resolver = Arc::new(MockResolver::ok("93.184.216.34", 300));
        let geo = Arc::new(MockGeoProvider::returning(us_location()));
        let history = Arc::new(MemoryHistory::new());
        let svc = service(resolver.clone(), geo.clone(), history.clone());

        let record = svc.lookup("https://example.com/foo").await.unwrap();

        assert_eq!(record.domain, "example.com");
        assert_eq!(record.ip_address, "93.184.216.34");
        assert_eq!(record.ttl, 300);
        assert_eq!(record.country, "United States");
        assert_eq!(record.city, "Los Angeles");
        assert!(!record.lookup_time.is_empty());

        // exactly one persistence attempt per successful resolution
        assert_eq!(history.row_count(), 1);
        assert_eq!(resolver.call_count(), 1);
        assert_eq!(geo.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_domain_short_circuits_before_any_call() {
        let resolver = Arc::new(MockResolver::ok("93.184.216.34", 300));
        let geo = Arc::new(MockGeoProvider::returning(us_location()));
        let history = Arc::new(MemoryHistory::new());
        let svc = service(resolver.clone(), geo.clone(), history.clone());

        let err = svc.lookup("").await.unwrap_err();
        assert!(matches!(err, LookupError::Validation));

        let err = svc.lookup("   ").await.unwrap_err();
        assert!(matches!(err, LookupError::Validation));

        assert_eq!(resolver.call_count(), 0);
        assert_eq!(geo.call_count(), 0);
        assert_eq!(history.row_count(), 0);
    }

    #[tokio::test]
    async fn test_resolution_failure_skips_geo_and_persistence() {
        let resolver = Arc::new(MockResolver::failing("NXDOMAIN"));
        let geo = Arc::new(MockGeoProvider::returning(us_location()));
        let history = Arc::new(MemoryHistory::new());
        let svc = service(resolver.clone(), geo.clone(), history.clone());

        let err = svc.lookup("nosuchdomain.example").await.unwrap_err();
        match err {
            LookupError::Resolution { domain, message } => {
                assert_eq!(domain, "nosuchdomain.example");
                assert_eq!(message, "NXDOMAIN");
            }
            other => panic!("expected resolution error, got {:?}", other),
        }

        assert_eq!(geo.call_count(), 0);
        assert_eq!(history.row_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_geo_still_returns_record() {
        let resolver = Arc::new(MockResolver::ok("10.0.0.1", 120));
        let geo = Arc::new(MockGeoProvider::returning(GeoLocation::unknown()));
        let history = Arc::new(MemoryHistory::new());
        let svc = service(resolver, geo, history.clone());

        let record = svc.lookup("internal.host").await.unwrap();

        assert_eq!(record.ip_address, "10.0.0.1");
        assert_eq!(record.country, "Unknown");
        assert_eq!(record.city, "Unknown");
        assert_eq!(record.region, "Unknown");
        assert_eq!(record.isp, "Unknown");
        assert_eq!(history.row_count(), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_does_not_fail_lookup() {
        let resolver = Arc::new(MockResolver::ok("93.184.216.34", 300));
        let geo = Arc::new(MockGeoProvider::returning(us_location()));
        let history = Arc::new(MemoryHistory::failing());
        let svc = service(resolver, geo, history.clone());

        let record = svc.lookup("example.com").await.unwrap();
        assert_eq!(record.ip_address, "93.184.216.34");
        assert_eq!(history.row_count(), 0);
    }

    #[tokio::test]
    async fn test_history_passes_limit_through() {
        let resolver = Arc::new(MockResolver::ok("1.1.1.1", 60));
        let geo = Arc::new(MockGeoProvider::returning(GeoLocation::unknown()));
        let history = Arc::new(MemoryHistory::new());
        let svc = service(resolver, geo, history);

        for name in ["a.example", "b.example", "c.example"] {
            svc.lookup(name).await.unwrap();
        }

        let recent = svc.history(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        // newest first
        assert_eq!(recent[0].domain, "c.example");
        assert_eq!(recent[1].domain, "b.example");
    }
}
