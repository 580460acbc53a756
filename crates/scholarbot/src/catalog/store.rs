use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::ScholarshipRecord;
use super::fallback;

/// Where the current snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    BuiltIn,
    Synced,
}

/// An immutable view of the catalog at a point in time. Cheap to clone;
/// the record list is shared.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub records: Arc<Vec<ScholarshipRecord>>,
    pub origin: CatalogOrigin,
    pub last_updated: NaiveDate,
}

/// Error raised when a replacement batch is rejected.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate scholarship id '{0}' in replacement batch")]
    DuplicateId(String),
}

/// Failure fetching from a remote catalog source.
#[derive(Debug, thiserror::Error)]
pub enum CatalogFetchError {
    #[error("catalog endpoint unreachable: {0}")]
    Transport(String),
    #[error("catalog endpoint returned status {0}")]
    Status(u16),
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

/// A remote provider of scholarship rows. The store places no retry or
/// backoff obligation here; implementations own their own policy.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ScholarshipRecord>, CatalogFetchError>;
}

/// The in-memory scholarship store. Snapshots are replaced wholesale;
/// readers never observe a partially-updated record list.
pub struct CatalogStore {
    inner: RwLock<CatalogSnapshot>,
}

impl CatalogStore {
    /// Seed the store with the built-in fallback catalog.
    pub fn with_builtin() -> Self {
        let revision = NaiveDate::parse_from_str(fallback::BUILTIN_REVISION, "%Y-%m-%d")
            .expect("builtin revision date is well-formed");
        Self {
            inner: RwLock::new(CatalogSnapshot {
                records: Arc::new(fallback::builtin_catalog()),
                origin: CatalogOrigin::BuiltIn,
                last_updated: revision,
            }),
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.inner.read().expect("catalog lock poisoned").clone()
    }

    pub fn records(&self) -> Arc<Vec<ScholarshipRecord>> {
        self.snapshot().records
    }

    /// Swap in a new record list. The batch must carry unique ids; a batch
    /// that does not is rejected in full and the current snapshot is kept.
    pub fn replace(
        &self,
        records: Vec<ScholarshipRecord>,
        origin: CatalogOrigin,
        as_of: NaiveDate,
    ) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateId(record.id.0.clone()));
            }
        }

        let mut guard = self.inner.write().expect("catalog lock poisoned");
        *guard = CatalogSnapshot {
            records: Arc::new(records),
            origin,
            last_updated: as_of,
        };
        Ok(())
    }

    /// Pull from a remote source. A successful non-empty fetch replaces the
    /// snapshot wholesale; a failed fetch or an empty row set leaves the
    /// existing snapshot untouched.
    pub async fn refresh<S: CatalogSource + ?Sized>(
        &self,
        source: &S,
        today: NaiveDate,
    ) -> CatalogOrigin {
        match source.fetch().await {
            Ok(rows) if rows.is_empty() => {
                warn!("catalog source returned no rows, keeping current snapshot");
            }
            Ok(rows) => match self.replace(rows, CatalogOrigin::Synced, today) {
                Ok(()) => {
                    let snapshot = self.snapshot();
                    info!(records = snapshot.records.len(), "catalog synced");
                }
                Err(err) => {
                    warn!(error = %err, "catalog sync rejected, keeping current snapshot");
                }
            },
            Err(err) => {
                warn!(error = %err, "catalog fetch failed, keeping current snapshot");
            }
        }
        self.snapshot().origin
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ScholarshipId;

    fn record(id: &str) -> ScholarshipRecord {
        ScholarshipRecord {
            id: ScholarshipId(id.to_string()),
            name: format!("Award {id}"),
            criteria: "High school senior.".to_string(),
            link: String::new(),
            deadline: "Varies".to_string(),
            amount: "Varies".to_string(),
            need_based: false,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    }

    #[test]
    fn store_starts_from_builtin_catalog() {
        let store = CatalogStore::with_builtin();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.origin, CatalogOrigin::BuiltIn);
        assert_eq!(snapshot.records.len(), 30);
    }

    #[test]
    fn replace_swaps_the_whole_snapshot() {
        let store = CatalogStore::with_builtin();
        store
            .replace(vec![record("a"), record("b")], CatalogOrigin::Synced, day())
            .expect("replace succeeds");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.origin, CatalogOrigin::Synced);
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.last_updated, day());
    }

    #[test]
    fn duplicate_ids_reject_the_batch_and_keep_the_snapshot() {
        let store = CatalogStore::with_builtin();
        let err = store
            .replace(vec![record("a"), record("a")], CatalogOrigin::Synced, day())
            .expect_err("duplicate ids rejected");
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
        assert_eq!(store.snapshot().origin, CatalogOrigin::BuiltIn);
        assert_eq!(store.records().len(), 30);
    }

    struct StaticSource(Vec<ScholarshipRecord>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<ScholarshipRecord>, CatalogFetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<ScholarshipRecord>, CatalogFetchError> {
            Err(CatalogFetchError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn refresh_replaces_on_successful_fetch() {
        let store = CatalogStore::with_builtin();
        let origin = store.refresh(&StaticSource(vec![record("a")]), day()).await;
        assert_eq!(origin, CatalogOrigin::Synced);
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn refresh_keeps_snapshot_on_failure() {
        let store = CatalogStore::with_builtin();
        let origin = store.refresh(&FailingSource, day()).await;
        assert_eq!(origin, CatalogOrigin::BuiltIn);
        assert_eq!(store.records().len(), 30);
    }

    #[tokio::test]
    async fn refresh_keeps_snapshot_on_empty_fetch() {
        let store = CatalogStore::with_builtin();
        let origin = store.refresh(&StaticSource(Vec::new()), day()).await;
        assert_eq!(origin, CatalogOrigin::BuiltIn);
        assert_eq!(store.records().len(), 30);
    }
}
