use serde::Serialize;

use super::engine::{score_match, MatchScore};
use crate::catalog::ScholarshipRecord;
use crate::profile::CandidateProfile;

/// One ranked match: the full record for display, the score, and the
/// reasons the engine produced. Ephemeral; recomputed on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub scholarship: ScholarshipRecord,
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

/// Ranking precondition failure. Expected and user-correctable, so it is
/// a distinct outcome rather than a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    #[error("complete your profile before matching")]
    ProfileIncomplete,
}

/// Score every record for the candidate, drop non-positive scores, and
/// sort by score descending. The sort is stable, so equal scores keep
/// the catalog's original order.
pub fn rank(
    profile: &CandidateProfile,
    records: &[ScholarshipRecord],
) -> Result<Vec<MatchResult>, RankError> {
    if !profile.is_started() {
        return Err(RankError::ProfileIncomplete);
    }

    let mut results: Vec<MatchResult> = records
        .iter()
        .map(|record| {
            let MatchScore { score, reasons } = score_match(profile, record);
            MatchResult {
                scholarship: record.clone(),
                match_score: score,
                match_reasons: reasons,
            }
        })
        .filter(|result| result.match_score > 0)
        .collect();

    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    Ok(results)
}
