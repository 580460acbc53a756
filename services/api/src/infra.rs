use async_trait::async_trait;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use scholarbot::catalog::NeedFilter;
use scholarbot::letters::{
    CompletionClient, CompletionError, CompletionRequest, HttpCompletionClient,
};
use scholarbot::session::{SessionError, SessionStore};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the browser-side key-value persistence.
#[derive(Default)]
pub(crate) struct InMemorySessionStore {
    values: Mutex<HashMap<String, Value>>,
}

impl SessionStore for InMemorySessionStore {
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

/// Completion collaborator selected at startup: the HTTP client when an
/// endpoint is configured, otherwise a backend that reports the feature
/// as unavailable.
pub(crate) enum CompletionBackend {
    Http(HttpCompletionClient),
    Disabled,
}

#[async_trait]
impl CompletionClient for CompletionBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        match self {
            CompletionBackend::Http(client) => client.complete(request).await,
            CompletionBackend::Disabled => Err(CompletionError::Unconfigured),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_need_filter(raw: &str) -> Result<NeedFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(NeedFilter::All),
        "need" => Ok(NeedFilter::Need),
        "merit" => Ok(NeedFilter::Merit),
        other => Err(format!("unknown need filter '{other}' (all|need|merit)")),
    }
}
