use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for catalog entries. Opaque, unique within a store
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScholarshipId(pub String);

/// One scholarship as served to students. `criteria` is free-text
/// eligibility prose and is the only field the scoring engine reads;
/// `link`, `deadline`, and `amount` are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub id: ScholarshipId,
    pub name: String,
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub link: String,
    #[serde(default = "varies")]
    pub deadline: String,
    #[serde(default = "varies")]
    pub amount: String,
    #[serde(default, deserialize_with = "need_marker")]
    pub need_based: bool,
}

fn varies() -> String {
    "Varies".to_string()
}

/// The hosted table stores the need-based flag as the marker string "Y";
/// anything else (other strings, null, absence) means not need-based.
/// Booleans are accepted for callers that already normalized.
fn need_marker<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(value)) => value == "Y",
        Some(serde_json::Value::Bool(value)) => value,
        _ => false,
    })
}

impl ScholarshipRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ScholarshipId(id.to_string()),
            name: name.to_string(),
            criteria: String::new(),
            link: String::new(),
            deadline: varies(),
            amount: varies(),
            need_based: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_remote_row_with_marker_string() {
        let record: ScholarshipRecord = serde_json::from_value(json!({
            "id": "abc123",
            "name": "Example Award",
            "criteria": "High school senior. 3.0+ GPA.",
            "need_based": "Y",
        }))
        .expect("row deserializes");

        assert!(record.need_based);
        assert_eq!(record.deadline, "Varies");
        assert_eq!(record.amount, "Varies");
        assert_eq!(record.link, "");
    }

    #[test]
    fn non_marker_values_mean_merit() {
        for value in [json!(""), json!("N"), json!(null)] {
            let record: ScholarshipRecord = serde_json::from_value(json!({
                "id": "abc123",
                "name": "Example Award",
                "need_based": value,
            }))
            .expect("row deserializes");
            assert!(!record.need_based);
        }
    }
}
