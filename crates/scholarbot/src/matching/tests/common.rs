use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{CatalogStore, ScholarshipId, ScholarshipRecord};
use crate::matching::{matching_router, MatchService};
use crate::profile::{AnswerValue, CandidateProfile};
use crate::session::{SessionError, SessionStore};

#[derive(Default)]
pub(super) struct MemorySessionStore {
    values: Mutex<HashMap<String, Value>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        Ok(self
            .values
            .lock()
            .expect("session mutex poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        self.values
            .lock()
            .expect("session mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

pub(super) struct UnavailableSessionStore;

impl SessionStore for UnavailableSessionStore {
    fn get(&self, _key: &str) -> Result<Option<Value>, SessionError> {
        Err(SessionError::Unavailable("storage offline".to_string()))
    }

    fn set(&self, _key: &str, _value: Value) -> Result<(), SessionError> {
        Err(SessionError::Unavailable("storage offline".to_string()))
    }
}

pub(super) fn record(id: &str, name: &str, criteria: &str, need_based: bool) -> ScholarshipRecord {
    ScholarshipRecord {
        id: ScholarshipId(id.to_string()),
        name: name.to_string(),
        criteria: criteria.to_string(),
        link: String::new(),
        deadline: "Varies".to_string(),
        amount: "Varies".to_string(),
        need_based,
    }
}

/// A U.S. citizen senior with a 3.8 GPA, graduating 2026.
pub(super) fn senior_profile() -> CandidateProfile {
    let mut profile = CandidateProfile::default();
    for (field, value) in [
        ("name", "Jordan Baker"),
        ("citizenship", "U.S. Citizen"),
        ("gpa", "3.8"),
        ("grad_year", "2026"),
    ] {
        profile
            .set_answer(field, AnswerValue::Text(value.to_string()))
            .expect("known field");
    }
    profile
}

pub(super) fn build_service() -> (
    MatchService<MemorySessionStore>,
    Arc<CatalogStore>,
    Arc<MemorySessionStore>,
) {
    let catalog = Arc::new(CatalogStore::with_builtin());
    let store = Arc::new(MemorySessionStore::default());
    let service = MatchService::new(catalog.clone(), store.clone());
    (service, catalog, store)
}

pub(super) fn router_with_service(service: MatchService<MemorySessionStore>) -> axum::Router {
    matching_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
