//! The match-scoring engine and the pipelines built on it: per-record
//! scoring with human-readable reasons, profile-gated ranking, and the
//! HTTP surface for both.

pub mod engine;
pub mod rank;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use engine::{score_match, MatchScore};
pub use rank::{rank, MatchResult, RankError};
pub use router::matching_router;
pub use service::{MatchService, MatchServiceError, ScholarshipView};
