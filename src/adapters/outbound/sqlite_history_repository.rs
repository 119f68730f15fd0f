//! SQLite History Repository
//!
//! Implements HistoryRepository on a local SQLite file. Every operation
//! opens its own scoped connection inside `spawn_blocking`; SQLite
//! serializes the individual appends, so concurrent writers need no
//! cross-request locking.

use crate::domain::entities::LookupRecord;
use crate::domain::ports::HistoryRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};

/// SQLite-backed append-only history log.
pub struct SqliteHistoryRepository {
    db_path: String,
}

impl SqliteHistoryRepository {
    /// Create a repository for the given database file.
    ///
    /// The file and schema are created lazily; call [`init`] at startup
    /// to fail fast on an unusable path.
    ///
    /// [`init`]: SqliteHistoryRepository::init
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Open the database once to create the schema.
    pub async fn init(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || Self::open(&db_path).map(|_| ()))
            .await
            .context("history init task failed")?
    }

    /// Open a scoped connection, creating the schema if absent.
    fn open(db_path: &str) -> Result<Connection> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("failed to open history database {db_path}"))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS lookup_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                domain TEXT NOT NULL,
                ip_address TEXT,
                country TEXT,
                city TEXT,
                region TEXT,
                isp TEXT,
                ttl INTEGER,
                lookup_time TEXT NOT NULL
            );
            "#,
        )
        .context("failed to create history schema")?;

        Ok(conn)
    }

    fn insert(db_path: &str, record: &LookupRecord) -> Result<()> {
        let conn = Self::open(db_path)?;

        // Blind insert: duplicate domains produce independent rows
        conn.execute(
            "INSERT INTO lookup_history
             (domain, ip_address, country, city, region, isp, ttl, lookup_time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.domain,
                record.ip_address,
                record.country,
                record.city,
                record.region,
                record.isp,
                record.ttl,
                record.lookup_time,
            ],
        )
        .context("failed to insert history row")?;

        Ok(())
    }

    fn select_recent(db_path: &str, limit: u32) -> Result<Vec<LookupRecord>> {
        let conn = Self::open(db_path)?;

        let mut stmt = conn.prepare(
            "SELECT domain, ip_address, country, city, region, isp, ttl, lookup_time
             FROM lookup_history
             ORDER BY lookup_time DESC, id DESC
             LIMIT ?1",
        )?;

        let records = stmt
            .query_map(params![limit], |row| Self::row_to_record(row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<LookupRecord> {
        Ok(LookupRecord {
            domain: row.get(0)?,
            ip_address: row.get(1)?,
            country: row.get(2)?,
            city: row.get(3)?,
            region: row.get(4)?,
            isp: row.get(5)?,
            ttl: row.get::<_, i64>(6)? as u32,
            lookup_time: row.get(7)?,
        })
    }
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    async fn append(&self, record: &LookupRecord) -> bool {
        let db_path = self.db_path.clone();
        let record = record.clone();

        let result =
            tokio::task::spawn_blocking(move || Self::insert(&db_path, &record)).await;

        match result {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::error!("error saving lookup history: {:#}", e);
                false
            }
            Err(e) => {
                tracing::error!("history write task failed: {}", e);
                false
            }
        }
    }

    async fn recent(&self, limit: u32) -> Result<Vec<LookupRecord>> {
        let db_path = self.db_path.clone();

        tokio::task::spawn_blocking(move || Self::select_recent(&db_path, limit))
            .await
            .context("history read task failed")?
    }
}
