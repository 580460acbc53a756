use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::ScholarshipRecord;
use crate::profile::CandidateProfile;
use crate::session::PrepAnswers;

use super::prompt;
use super::template::LetterTemplate;

/// One request to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
}

/// Failure surface of the text-generation collaborator. Callers report
/// these to the user; nothing here triggers an automatic retry.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("text generation is not configured")]
    Unconfigured,
    #[error("completion endpoint unreachable: {0}")]
    Transport(String),
    #[error("completion endpoint returned status {status}: {message}")]
    Service { status: u16, message: String },
    #[error("completion returned no text")]
    EmptyContent,
}

/// The external text-generation service as seen by this crate: prompt in,
/// prose out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}

/// What the letter should be written about: a catalog record, or details
/// the student pasted/uploaded themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ScholarshipSelection {
    Catalog(ScholarshipRecord),
    Custom {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        url: Option<String>,
        text: String,
    },
}

/// A freshly generated letter, not yet archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLetter {
    pub scholarship: String,
    pub template_id: String,
    pub body: String,
}

/// Error raised by the letter generator. The precondition variants are
/// user-correctable refusals, not faults.
#[derive(Debug, thiserror::Error)]
pub enum LetterError {
    #[error("complete your profile before generating letters")]
    ProfileIncomplete,
    #[error("select a scholarship or provide its details first")]
    MissingScholarship,
    #[error("no scholarship url provided")]
    MissingUrl,
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Composes the prompt builders with the completion collaborator.
pub struct LetterGenerator<C> {
    client: Arc<C>,
}

impl<C: CompletionClient> LetterGenerator<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Draft an application letter for the selected scholarship in the
    /// chosen style. Refuses before calling out when the profile has no
    /// name or the selection is empty.
    pub async fn generate_letter(
        &self,
        profile: &CandidateProfile,
        selection: &ScholarshipSelection,
        template: &LetterTemplate,
        brag_sheet: Option<&str>,
        prep_answers: &PrepAnswers,
    ) -> Result<GeneratedLetter, LetterError> {
        if !profile.is_started() {
            return Err(LetterError::ProfileIncomplete);
        }
        if let ScholarshipSelection::Custom { text, .. } = selection {
            if text.trim().is_empty() {
                return Err(LetterError::MissingScholarship);
            }
        }

        let (label, details) = prompt::scholarship_details(selection);
        let system = prompt::letter_system_prompt(template, profile, brag_sheet, prep_answers);
        let body = self
            .client
            .complete(CompletionRequest {
                system: Some(system),
                prompt: prompt::letter_request(&label, &details),
            })
            .await?;

        Ok(GeneratedLetter {
            scholarship: label,
            template_id: template.id.clone(),
            body,
        })
    }

    /// Produce the reusable markdown candidate-profile document.
    pub async fn generate_profile_document(
        &self,
        profile: &CandidateProfile,
        brag_sheet: Option<&str>,
        prep_answers: &PrepAnswers,
    ) -> Result<String, LetterError> {
        if !profile.is_started() {
            return Err(LetterError::ProfileIncomplete);
        }
        let body = self
            .client
            .complete(CompletionRequest {
                system: None,
                prompt: prompt::profile_document_request(profile, brag_sheet, prep_answers),
            })
            .await?;
        Ok(body)
    }

    /// Ask the collaborator to research a scholarship page and summarize
    /// its key details for the custom-selection flow.
    pub async fn research_scholarship(&self, url: &str) -> Result<String, LetterError> {
        if url.trim().is_empty() {
            return Err(LetterError::MissingUrl);
        }
        let body = self
            .client
            .complete(CompletionRequest {
                system: None,
                prompt: prompt::research_request(url),
            })
            .await?;
        Ok(body)
    }
}
