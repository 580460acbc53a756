use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::rank::{rank, MatchResult, RankError};
use crate::catalog::{
    deadline_status, filter_records, CatalogOrigin, CatalogStore, DeadlineStatus, NeedFilter,
    ScholarshipRecord,
};
use crate::profile::{AnswerValue, CandidateProfile, ProfileFieldError};
use crate::session::{ProfileSession, SessionError, SessionStore};

/// A catalog record decorated with its derived deadline status for
/// display.
#[derive(Debug, Clone, Serialize)]
pub struct ScholarshipView {
    #[serde(flatten)]
    pub record: ScholarshipRecord,
    pub deadline_status: DeadlineStatus,
}

/// Browse result: the filtered records plus snapshot provenance.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub scholarships: Vec<ScholarshipView>,
    pub origin: CatalogOrigin,
    pub last_updated: NaiveDate,
}

/// Service composing the catalog store, the session-backed profile, and
/// the scoring pipelines.
pub struct MatchService<S> {
    catalog: Arc<CatalogStore>,
    session: ProfileSession<S>,
}

impl<S: SessionStore> MatchService<S> {
    pub fn new(catalog: Arc<CatalogStore>, store: Arc<S>) -> Self {
        Self {
            catalog,
            session: ProfileSession::new(store),
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The stored profile, or a fresh empty one when nothing was saved yet.
    pub fn profile(&self) -> Result<CandidateProfile, MatchServiceError> {
        Ok(self.session.load_profile()?.unwrap_or_default())
    }

    /// Apply one questionnaire answer and persist the profile immediately.
    pub fn save_answer(
        &self,
        field: &str,
        value: AnswerValue,
    ) -> Result<CandidateProfile, MatchServiceError> {
        let mut profile = self.profile()?;
        profile.set_answer(field, value)?;
        self.session.save_profile(&profile)?;
        Ok(profile)
    }

    /// Run the ranking pipeline for the stored profile over the current
    /// catalog snapshot.
    pub fn matches(&self) -> Result<Vec<MatchResult>, MatchServiceError> {
        let profile = self.profile()?;
        let records = self.catalog.records();
        Ok(rank(&profile, &records)?)
    }

    /// Run the search/filter pipeline and decorate each record with its
    /// deadline status as of `today`.
    pub fn browse(&self, query: &str, need: NeedFilter, today: NaiveDate) -> CatalogPage {
        let snapshot = self.catalog.snapshot();
        let scholarships = filter_records(&snapshot.records, query, need)
            .into_iter()
            .map(|record| ScholarshipView {
                record: record.clone(),
                deadline_status: deadline_status(&record.deadline, today),
            })
            .collect();
        CatalogPage {
            scholarships,
            origin: snapshot.origin,
            last_updated: snapshot.last_updated,
        }
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Rank(#[from] RankError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Field(#[from] ProfileFieldError),
}
