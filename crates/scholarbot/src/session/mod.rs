//! Local persistence for user-entered state. The backing store is an
//! opaque key-value surface with JSON get/set semantics; typed facades own
//! the well-known keys. Implementations (browser storage bridge, in-memory
//! test double) live with the callers.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::profile::CandidateProfile;

pub const PROFILE_KEY: &str = "scholarbot-profile";
pub const PREP_ANSWERS_KEY: &str = "scholarbot-answers";
pub const LETTERS_KEY: &str = "scholarbot-letters";

/// Answers to the application-prep essay questions, keyed by question slot.
pub type PrepAnswers = BTreeMap<String, String>;

/// Storage abstraction with get/set semantics. Values survive a restart of
/// the presentation layer; nothing stronger is promised.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, SessionError>;
    fn set(&self, key: &str, value: Value) -> Result<(), SessionError>;
}

/// Error enumeration for session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
    #[error("stored value for '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, SessionError> {
    serde_json::from_value(value).map_err(|source| SessionError::Malformed {
        key: key.to_string(),
        source,
    })
}

fn encode<T: Serialize>(key: &str, value: &T) -> Result<Value, SessionError> {
    serde_json::to_value(value).map_err(|source| SessionError::Malformed {
        key: key.to_string(),
        source,
    })
}

/// Typed facade over the session store for profile state. The profile is
/// written back after every field mutation.
pub struct ProfileSession<S> {
    store: Arc<S>,
}

impl<S: SessionStore> ProfileSession<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn load_profile(&self) -> Result<Option<CandidateProfile>, SessionError> {
        self.store
            .get(PROFILE_KEY)?
            .map(|value| decode(PROFILE_KEY, value))
            .transpose()
    }

    pub fn save_profile(&self, profile: &CandidateProfile) -> Result<(), SessionError> {
        self.store.set(PROFILE_KEY, encode(PROFILE_KEY, profile)?)
    }

    pub fn load_prep_answers(&self) -> Result<PrepAnswers, SessionError> {
        Ok(self
            .store
            .get(PREP_ANSWERS_KEY)?
            .map(|value| decode(PREP_ANSWERS_KEY, value))
            .transpose()?
            .unwrap_or_default())
    }

    pub fn save_prep_answers(&self, answers: &PrepAnswers) -> Result<(), SessionError> {
        self.store
            .set(PREP_ANSWERS_KEY, encode(PREP_ANSWERS_KEY, answers)?)
    }
}
