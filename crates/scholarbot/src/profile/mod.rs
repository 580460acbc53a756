//! Candidate profile: the fixed questionnaire, the typed answer set, and
//! field-by-field mutation used by the profile-editing surface.

pub mod domain;
pub mod questionnaire;

pub use domain::{AnswerValue, CandidateProfile, ProfileFieldError};
pub use questionnaire::{InputKind, ProfileQuestion, ProfileStep, QUESTIONS, STEPS};
