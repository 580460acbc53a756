//! Integration specifications for catalog refresh semantics: wholesale
//! atomic replacement on success, untouched snapshot on any failure.

use async_trait::async_trait;
use chrono::NaiveDate;
use scholarbot::catalog::{
    CatalogFetchError, CatalogOrigin, CatalogSource, CatalogStore, ScholarshipId,
    ScholarshipRecord,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

fn remote_record(id: &str, name: &str) -> ScholarshipRecord {
    ScholarshipRecord {
        id: ScholarshipId(id.to_string()),
        name: name.to_string(),
        criteria: "High school senior. 3.0+ GPA.".to_string(),
        link: String::new(),
        deadline: "2026-10-01".to_string(),
        amount: "$5,000".to_string(),
        need_based: false,
    }
}

struct CountingSource {
    calls: AtomicUsize,
    outcome: Result<Vec<ScholarshipRecord>, ()>,
}

impl CountingSource {
    fn succeeding(rows: Vec<ScholarshipRecord>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(rows),
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Err(()),
        }
    }
}

#[async_trait]
impl CatalogSource for CountingSource {
    async fn fetch(&self) -> Result<Vec<ScholarshipRecord>, CatalogFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(rows) => Ok(rows.clone()),
            Err(()) => Err(CatalogFetchError::Status(503)),
        }
    }
}

#[tokio::test]
async fn successful_sync_replaces_the_builtin_catalog_wholesale() {
    let store = CatalogStore::with_builtin();
    let source = CountingSource::succeeding(vec![
        remote_record("r1", "Remote Award One"),
        remote_record("r2", "Remote Award Two"),
    ]);

    let origin = store.refresh(&source, day()).await;

    assert_eq!(origin, CatalogOrigin::Synced);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.last_updated, day());
    assert!(snapshot
        .records
        .iter()
        .all(|record| record.name.starts_with("Remote Award")));
}

#[tokio::test]
async fn failed_sync_leaves_the_previous_snapshot_in_place() {
    let store = CatalogStore::with_builtin();

    // First sync succeeds, second fails; the synced snapshot must survive.
    let good = CountingSource::succeeding(vec![remote_record("r1", "Remote Award One")]);
    store.refresh(&good, day()).await;

    let bad = CountingSource::failing();
    let origin = store.refresh(&bad, day()).await;

    assert_eq!(bad.calls.load(Ordering::SeqCst), 1, "no retry on failure");
    assert_eq!(origin, CatalogOrigin::Synced);
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn duplicate_remote_ids_reject_the_whole_batch() {
    let store = CatalogStore::with_builtin();
    let source = CountingSource::succeeding(vec![
        remote_record("r1", "Remote Award One"),
        remote_record("r1", "Remote Award Duplicate"),
    ]);

    let origin = store.refresh(&source, day()).await;

    assert_eq!(origin, CatalogOrigin::BuiltIn);
    assert_eq!(store.records().len(), 30);
}

#[tokio::test]
async fn remote_rows_accept_sparse_payloads() {
    let rows: Vec<ScholarshipRecord> = serde_json::from_str(
        r#"[
            {"id": "r1", "name": "Sparse Award", "need_based": "Y"},
            {"id": "r2", "name": "Merit Award", "criteria": "3.0+ GPA", "need_based": ""}
        ]"#,
    )
    .expect("rows deserialize");

    let store = CatalogStore::with_builtin();
    store
        .refresh(&CountingSource::succeeding(rows), day())
        .await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.records.len(), 2);
    assert!(snapshot.records[0].need_based);
    assert_eq!(snapshot.records[0].deadline, "Varies");
    assert_eq!(snapshot.records[0].amount, "Varies");
    assert!(!snapshot.records[1].need_based);
}
