use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::session::{SessionError, SessionStore, LETTERS_KEY};

use super::generator::GeneratedLetter;

/// A letter the student chose to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLetter {
    pub id: String,
    pub scholarship: String,
    pub template_id: String,
    pub body: String,
    pub saved_on: NaiveDate,
}

static LETTER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_letter_id() -> String {
    let id = LETTER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("letter-{id:06}")
}

/// Session-backed archive of saved letters. Appends only; deletion is a
/// whole-list rewrite by the caller.
pub struct LetterArchive<S> {
    store: Arc<S>,
}

impl<S: SessionStore> LetterArchive<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<SavedLetter>, SessionError> {
        Ok(self
            .store
            .get(LETTERS_KEY)?
            .map(|value| {
                serde_json::from_value(value).map_err(|source| SessionError::Malformed {
                    key: LETTERS_KEY.to_string(),
                    source,
                })
            })
            .transpose()?
            .unwrap_or_default())
    }

    /// Archive a generated letter, returning the stored entry.
    pub fn save(
        &self,
        letter: GeneratedLetter,
        saved_on: NaiveDate,
    ) -> Result<SavedLetter, SessionError> {
        let mut letters = self.list()?;
        let saved = SavedLetter {
            id: next_letter_id(),
            scholarship: letter.scholarship,
            template_id: letter.template_id,
            body: letter.body,
            saved_on,
        };
        letters.push(saved.clone());
        let value =
            serde_json::to_value(&letters).map_err(|source| SessionError::Malformed {
                key: LETTERS_KEY.to_string(),
                source,
            })?;
        self.store.set(LETTERS_KEY, value)?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        values: Mutex<HashMap<String, Value>>,
    }

    impl SessionStore for MemoryStore {
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

    fn generated(scholarship: &str) -> GeneratedLetter {
        GeneratedLetter {
            scholarship: scholarship.to_string(),
            template_id: "narrative".to_string(),
            body: "Dear committee,".to_string(),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    }

    #[test]
    fn archive_starts_empty_and_appends() {
        let archive = LetterArchive::new(Arc::new(MemoryStore::default()));
        assert!(archive.list().expect("list succeeds").is_empty());

        let first = archive
            .save(generated("Gates Scholarship"), day())
            .expect("save succeeds");
        let second = archive
            .save(generated("Dell Scholars"), day())
            .expect("save succeeds");
        assert_ne!(first.id, second.id);

        let letters = archive.list().expect("list succeeds");
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[0].scholarship, "Gates Scholarship");
        assert_eq!(letters[1].scholarship, "Dell Scholars");
    }
}
