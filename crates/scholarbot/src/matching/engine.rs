//! Rule-based eligibility scorer. Criteria prose has no structured schema,
//! so each rule pattern-matches trigger phrases in the lower-cased text.
//! This is a deliberate heuristic with known sharp edges (synonyms miss,
//! substrings can collide inside unrelated words); the trigger phrases and
//! point values are load-bearing and must not be "improved" silently.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog::ScholarshipRecord;
use crate::profile::CandidateProfile;

/// Score plus the ordered reasons for it, one reason per rule firing.
/// Reason order follows rule evaluation order, not contribution size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: u8,
    pub reasons: Vec<String>,
}

const MAX_SCORE: u32 = 100;

struct HeritageRule {
    criteria_terms: &'static [&'static str],
    name_terms: &'static [&'static str],
    identity_term: &'static str,
}

/// Each category checks the scholarship's criteria (and sometimes name)
/// for its trigger phrases and the candidate's joined identity text for
/// its own term. Categories are independent; a scholarship naming several
/// heritage paths can award the bonus more than once.
const HERITAGE_RULES: [HeritageRule; 4] = [
    HeritageRule {
        criteria_terms: &["african american", "black"],
        name_terms: &["african american"],
        identity_term: "african",
    },
    HeritageRule {
        criteria_terms: &["hispanic", "latino"],
        name_terms: &["hispanic"],
        identity_term: "hispanic",
    },
    HeritageRule {
        criteria_terms: &["asian", "pacific islander"],
        name_terms: &["asian"],
        identity_term: "asian",
    },
    HeritageRule {
        criteria_terms: &["native american", "indigenous", "tribal"],
        name_terms: &[],
        identity_term: "native",
    },
];

fn gpa_requirement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Single decimal digit on purpose: "3.5+ GPA", "GPA of 3.0". Criteria
    // written as "3.25 GPA" or "GPA 3" fall through to the no-requirement
    // branch.
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d\.\d)\+?\s*gpa|gpa\s*(?:of\s*)?(\d\.\d)").expect("gpa pattern compiles")
    })
}

/// Longest numeric prefix of the answer, so "3.8 unweighted" still reads
/// as 3.8. A value with no numeric prefix is no signal at all.
fn leading_decimal(raw: &str) -> Option<f64> {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    let pattern = PREFIX
        .get_or_init(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("prefix pattern compiles"));
    pattern
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn gpa_requirement(criteria: &str) -> Option<f64> {
    let captures = gpa_requirement_pattern().captures(criteria)?;
    let matched = captures.get(1).or_else(|| captures.get(2))?;
    matched.as_str().parse::<f64>().ok()
}

/// Score one candidate against one scholarship.
///
/// Pure and total: missing or unparseable profile fields mean "rule does
/// not apply", never an error. All rules are evaluated regardless of
/// earlier firings; the sum is capped at 100.
pub fn score_match(profile: &CandidateProfile, scholarship: &ScholarshipRecord) -> MatchScore {
    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();
    let criteria = scholarship.criteria.to_lowercase();
    let name = scholarship.name.to_lowercase();

    if let Some(citizenship) = profile.citizenship.as_deref() {
        let citizenship = citizenship.to_lowercase();
        if criteria.contains("u.s. citizen")
            && (citizenship.contains("u.s.") || citizenship.contains("dual"))
        {
            score += 20;
            reasons.push("Citizenship eligible".to_string());
        }
        if criteria.contains("daca") && citizenship.contains("daca") {
            score += 25;
            reasons.push("DACA eligible".to_string());
        }
    }

    if !profile.ethnicity.is_empty() {
        let identity = profile
            .ethnicity
            .iter()
            .map(|selection| selection.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        for rule in &HERITAGE_RULES {
            let in_award_text = rule.criteria_terms.iter().any(|term| criteria.contains(term))
                || rule.name_terms.iter().any(|term| name.contains(term));
            if in_award_text && identity.contains(rule.identity_term) {
                score += 25;
                reasons.push("Heritage match".to_string());
            }
        }
    }

    if let Some(gpa) = profile.gpa.as_deref().and_then(leading_decimal) {
        match gpa_requirement(&criteria) {
            Some(required) => {
                if gpa >= required {
                    score += 15;
                    reasons.push(format!("GPA {gpa} meets {required} req"));
                }
            }
            None => {
                if gpa >= 3.0 {
                    score += 10;
                    reasons.push("Strong GPA".to_string());
                }
            }
        }
    }

    if let Some(need) = profile.financial_need.as_deref() {
        let need = need.to_lowercase();
        if scholarship.need_based && need.contains("yes") {
            score += 15;
            reasons.push("Need-based match".to_string());
        }
        if !scholarship.need_based && !need.contains("yes") {
            score += 5;
            reasons.push("Merit-based fit".to_string());
        }
    }

    if let Some(major) = profile.intended_major.as_deref() {
        let major = major.to_lowercase();
        let award_is_stem = criteria.contains("stem")
            || criteria.contains("science")
            || criteria.contains("engineering");
        let major_is_stem = major.contains("science")
            || major.contains("engineering")
            || major.contains("computer")
            || major.contains("math");
        if award_is_stem && major_is_stem {
            score += 15;
            reasons.push("STEM field match".to_string());
        }
    }

    // Length over 30 chars is a cheap "told us something real" heuristic,
    // not a semantic check.
    let has_activities = profile
        .activities
        .as_deref()
        .is_some_and(|text| text.chars().count() > 30);
    if has_activities {
        if criteria.contains("leadership") {
            score += 10;
            reasons.push("Leadership valued".to_string());
        }
        if criteria.contains("community") || criteria.contains("volunteer") {
            score += 10;
            reasons.push("Service match".to_string());
        }
    }

    if profile.grad_year.is_some()
        && (criteria.contains("high school senior") || criteria.contains("graduating"))
    {
        score += 5;
        reasons.push("Grade level match".to_string());
    }

    MatchScore {
        score: score.min(MAX_SCORE) as u8,
        reasons,
    }
}
