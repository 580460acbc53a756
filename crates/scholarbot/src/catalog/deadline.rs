use chrono::NaiveDate;
use serde::Serialize;

/// Deadline strings that are not calendar dates and pass through unchanged.
const SENTINELS: [&str; 2] = ["Varies", "Nomination Only"];

/// Display urgency for a deadline, mapped to styling by the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineUrgency {
    Neutral,
    Expired,
    Urgent,
    Warning,
    Normal,
}

/// Label plus urgency for a scholarship deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadlineStatus {
    pub label: String,
    pub urgency: DeadlineUrgency,
}

impl DeadlineStatus {
    fn neutral(label: &str) -> Self {
        Self {
            label: label.to_string(),
            urgency: DeadlineUrgency::Neutral,
        }
    }
}

/// Derive the display status for a deadline relative to `today`.
///
/// The day difference uses calendar-day granularity, which matches a
/// ceiling over the sub-day delta: a deadline later today is "0d left",
/// never negative. Unparseable non-sentinel strings degrade to a neutral
/// pass-through rather than an error.
pub fn deadline_status(deadline: &str, today: NaiveDate) -> DeadlineStatus {
    if deadline.is_empty() {
        return DeadlineStatus::neutral("Varies");
    }
    if SENTINELS.contains(&deadline) {
        return DeadlineStatus::neutral(deadline);
    }

    let Ok(date) = NaiveDate::parse_from_str(deadline, "%Y-%m-%d") else {
        return DeadlineStatus::neutral(deadline);
    };

    let days = (date - today).num_days();
    if days < 0 {
        DeadlineStatus {
            label: "Expired".to_string(),
            urgency: DeadlineUrgency::Expired,
        }
    } else if days <= 14 {
        DeadlineStatus {
            label: format!("{days}d left"),
            urgency: DeadlineUrgency::Urgent,
        }
    } else if days <= 60 {
        DeadlineStatus {
            label: format!("{days}d left"),
            urgency: DeadlineUrgency::Warning,
        }
    } else {
        DeadlineStatus {
            label: date.format("%b %-d").to_string(),
            urgency: DeadlineUrgency::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
    }

    #[test]
    fn sentinels_pass_through_unchanged() {
        for sentinel in ["Varies", "Nomination Only"] {
            let status = deadline_status(sentinel, today());
            assert_eq!(status.label, sentinel);
            assert_eq!(status.urgency, DeadlineUrgency::Neutral);
        }
    }

    #[test]
    fn empty_deadline_reads_varies() {
        let status = deadline_status("", today());
        assert_eq!(status.label, "Varies");
        assert_eq!(status.urgency, DeadlineUrgency::Neutral);
    }

    #[test]
    fn deadline_today_is_zero_days_left() {
        let status = deadline_status("2026-03-01", today());
        assert_eq!(status.label, "0d left");
        assert_eq!(status.urgency, DeadlineUrgency::Urgent);
    }

    #[test]
    fn deadline_yesterday_is_expired() {
        let status = deadline_status("2026-02-28", today());
        assert_eq!(status.label, "Expired");
        assert_eq!(status.urgency, DeadlineUrgency::Expired);
    }

    #[test]
    fn urgent_window_ends_at_fourteen_days() {
        assert_eq!(
            deadline_status("2026-03-15", today()).urgency,
            DeadlineUrgency::Urgent
        );
        assert_eq!(
            deadline_status("2026-03-16", today()).urgency,
            DeadlineUrgency::Warning
        );
    }

    #[test]
    fn warning_window_is_inclusive_at_sixty_days() {
        let sixty = today() + chrono::Duration::days(60);
        let status = deadline_status(&sixty.format("%Y-%m-%d").to_string(), today());
        assert_eq!(status.label, "60d left");
        assert_eq!(status.urgency, DeadlineUrgency::Warning);

        let sixty_one = today() + chrono::Duration::days(61);
        let status = deadline_status(&sixty_one.format("%Y-%m-%d").to_string(), today());
        assert_eq!(status.label, "May 1");
        assert_eq!(status.urgency, DeadlineUrgency::Normal);
    }

    #[test]
    fn unparseable_deadline_degrades_to_neutral() {
        let status = deadline_status("sometime next fall", today());
        assert_eq!(status.label, "sometime next fall");
        assert_eq!(status.urgency, DeadlineUrgency::Neutral);
    }
}
