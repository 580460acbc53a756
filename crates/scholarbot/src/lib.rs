//! Scholarship matching for students: a rule-based eligibility scorer over a
//! catalog of scholarship records, plus the ranking/search pipelines,
//! deadline status derivation, and the surrounding application services
//! (profile questionnaire, letter generation, document intake).

pub mod catalog;
pub mod config;
pub mod documents;
pub mod error;
pub mod letters;
pub mod matching;
pub mod profile;
pub mod session;
pub mod telemetry;
