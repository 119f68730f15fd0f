//! History Repository Port
//!
//! Defines the interface for the append-only lookup history log.

use crate::domain::entities::LookupRecord;
use async_trait::async_trait;

/// Append-only log of past lookups.
///
/// This is a history log, not a cache: appends are blind inserts and
/// duplicate domains produce independent rows. Records are never
/// updated or deleted.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append one record. Returns whether the write succeeded.
    ///
    /// Persistence failures must not fail the user-facing lookup, so
    /// this never raises; implementations log the underlying error and
    /// report `false`.
    async fn append(&self, record: &LookupRecord) -> bool;

    /// The most recent lookups, newest first, at most `limit` rows.
    async fn recent(&self, limit: u32) -> anyhow::Result<Vec<LookupRecord>>;
}
