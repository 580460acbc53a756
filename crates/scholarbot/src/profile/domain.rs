use serde::{Deserialize, Serialize};

use super::questionnaire::{InputKind, QUESTIONS};

/// Answer payload for a single questionnaire field. Multi-select fields
/// take `Selections`; everything else takes `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selections(Vec<String>),
}

/// The candidate's answers to the fixed questionnaire. Every field is
/// optional; an absent field means "no information provided", never a
/// negative signal. Empty-string answers normalize to absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ethnicity: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grad_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_need: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_story: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing_style: Option<String>,
}

/// Error raised when mutating a profile field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileFieldError {
    #[error("unknown profile field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' expects a {expected} answer")]
    WrongShape {
        field: String,
        expected: &'static str,
    },
}

fn normalize(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl CandidateProfile {
    /// A profile counts as started once it has a name. Ranking and letter
    /// generation refuse to run before that.
    pub fn is_started(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Set one answer by questionnaire field id. The caller persists the
    /// profile after every successful mutation.
    pub fn set_answer(&mut self, field: &str, value: AnswerValue) -> Result<(), ProfileFieldError> {
        let question = QUESTIONS
            .iter()
            .find(|q| q.id == field)
            .ok_or_else(|| ProfileFieldError::UnknownField(field.to_string()))?;

        match (question.input, value) {
            (InputKind::MultiSelect, AnswerValue::Selections(values)) => {
                self.ethnicity = values.into_iter().filter(|v| !v.is_empty()).collect();
                Ok(())
            }
            (InputKind::MultiSelect, AnswerValue::Text(_)) => Err(ProfileFieldError::WrongShape {
                field: field.to_string(),
                expected: "multi-select",
            }),
            (_, AnswerValue::Selections(_)) => Err(ProfileFieldError::WrongShape {
                field: field.to_string(),
                expected: "text",
            }),
            (_, AnswerValue::Text(text)) => {
                let slot = match field {
                    "name" => &mut self.name,
                    "email" => &mut self.email,
                    "phone" => &mut self.phone,
                    "location" => &mut self.location,
                    "citizenship" => &mut self.citizenship,
                    "gpa" => &mut self.gpa,
                    "satact" => &mut self.satact,
                    "school" => &mut self.school,
                    "grad_year" => &mut self.grad_year,
                    "intended_major" => &mut self.intended_major,
                    "financial_need" => &mut self.financial_need,
                    "activities" => &mut self.activities,
                    "awards" => &mut self.awards,
                    "community_service" => &mut self.community_service,
                    "personal_story" => &mut self.personal_story,
                    "career_goal" => &mut self.career_goal,
                    "writing_style" => &mut self.writing_style,
                    other => return Err(ProfileFieldError::UnknownField(other.to_string())),
                };
                *slot = normalize(text);
                Ok(())
            }
        }
    }

    fn answered(&self, field: &str) -> bool {
        match field {
            "name" => self.name.is_some(),
            "email" => self.email.is_some(),
            "phone" => self.phone.is_some(),
            "location" => self.location.is_some(),
            "citizenship" => self.citizenship.is_some(),
            "ethnicity" => !self.ethnicity.is_empty(),
            "gpa" => self.gpa.is_some(),
            "satact" => self.satact.is_some(),
            "school" => self.school.is_some(),
            "grad_year" => self.grad_year.is_some(),
            "intended_major" => self.intended_major.is_some(),
            "financial_need" => self.financial_need.is_some(),
            "activities" => self.activities.is_some(),
            "awards" => self.awards.is_some(),
            "community_service" => self.community_service.is_some(),
            "personal_story" => self.personal_story.is_some(),
            "career_goal" => self.career_goal.is_some(),
            "writing_style" => self.writing_style.is_some(),
            _ => false,
        }
    }

    /// Share of questionnaire fields answered, rounded to whole percent.
    pub fn completion_percent(&self) -> u8 {
        let answered = QUESTIONS.iter().filter(|q| self.answered(q.id)).count();
        ((answered as f64 / QUESTIONS.len() as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_is_not_started() {
        let profile = CandidateProfile::default();
        assert!(!profile.is_started());
        assert_eq!(profile.completion_percent(), 0);
    }

    #[test]
    fn set_answer_routes_to_the_named_field() {
        let mut profile = CandidateProfile::default();
        profile
            .set_answer("name", AnswerValue::Text("Jordan Baker".to_string()))
            .expect("name is a known field");
        profile
            .set_answer("gpa", AnswerValue::Text("3.7".to_string()))
            .expect("gpa is a known field");

        assert!(profile.is_started());
        assert_eq!(profile.gpa.as_deref(), Some("3.7"));
    }

    #[test]
    fn empty_text_answer_clears_the_field() {
        let mut profile = CandidateProfile::default();
        profile
            .set_answer("school", AnswerValue::Text("Lincoln High".to_string()))
            .expect("known field");
        profile
            .set_answer("school", AnswerValue::Text(String::new()))
            .expect("known field");
        assert!(profile.school.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut profile = CandidateProfile::default();
        let err = profile
            .set_answer("shoe_size", AnswerValue::Text("11".to_string()))
            .expect_err("unknown field");
        assert_eq!(err, ProfileFieldError::UnknownField("shoe_size".to_string()));
    }

    #[test]
    fn ethnicity_requires_the_selection_shape() {
        let mut profile = CandidateProfile::default();
        let err = profile
            .set_answer("ethnicity", AnswerValue::Text("Hispanic/Latino".to_string()))
            .expect_err("wrong shape");
        assert!(matches!(err, ProfileFieldError::WrongShape { .. }));

        profile
            .set_answer(
                "ethnicity",
                AnswerValue::Selections(vec!["Hispanic/Latino".to_string()]),
            )
            .expect("selection shape accepted");
        assert_eq!(profile.ethnicity, vec!["Hispanic/Latino".to_string()]);
    }

    #[test]
    fn completion_counts_answered_fields() {
        let mut profile = CandidateProfile::default();
        profile
            .set_answer("name", AnswerValue::Text("Jordan".to_string()))
            .expect("known field");
        profile
            .set_answer(
                "ethnicity",
                AnswerValue::Selections(vec!["Multiracial".to_string()]),
            )
            .expect("known field");

        // 2 of 18 fields, rounded.
        assert_eq!(profile.completion_percent(), 11);
    }
}
