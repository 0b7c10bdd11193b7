//! Interview model.
//!
//! Interviews are owned by the backend and arrive as raw JSON records.
//! Dates and times are kept exactly as received; accessors parse them on
//! demand. A record whose date or time does not parse simply fails every
//! comparison and drops out of week, month and upcoming windows.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SlotTime;

/// A scheduled interview (read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    /// Backend identifier.
    pub id: i64,
    /// Assigned interviewer.
    pub interviewer_id: i64,
    /// ISO date (`YYYY-MM-DD`, or an ISO datetime whose date part is used).
    #[serde(default)]
    pub scheduled_date: String,
    /// Start time (`HH:MM` or `HH:MM:SS`).
    #[serde(default)]
    pub scheduled_time: String,
    /// Interview kind. Missing or unrecognized kinds read as `Other`.
    #[serde(rename = "type", default)]
    pub interview_type: InterviewType,
}

/// Kinds of admission interview.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewType {
    /// Meeting with the applicant's family.
    Family,
    /// Meeting with the applicant.
    Student,
    /// Psychological evaluation.
    Psychological,
    /// Academic level assessment.
    Academic,
    /// Behavioral assessment.
    Behavioral,
    /// One-on-one general interview.
    Individual,
    /// Kind not known to this crate. No role lists it as a specialty.
    #[default]
    #[serde(other)]
    Other,
}

impl InterviewType {
    /// All known interview kinds.
    pub const ALL: [InterviewType; 6] = [
        InterviewType::Family,
        InterviewType::Student,
        InterviewType::Psychological,
        InterviewType::Academic,
        InterviewType::Behavioral,
        InterviewType::Individual,
    ];
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterviewType::Family => "FAMILY",
            InterviewType::Student => "STUDENT",
            InterviewType::Psychological => "PSYCHOLOGICAL",
            InterviewType::Academic => "ACADEMIC",
            InterviewType::Behavioral => "BEHAVIORAL",
            InterviewType::Individual => "INDIVIDUAL",
            InterviewType::Other => "OTHER",
        };
        f.write_str(s)
    }
}

impl Interview {
    /// Creates an interview record.
    pub fn new(
        id: i64,
        interviewer_id: i64,
        scheduled_date: impl Into<String>,
        scheduled_time: impl Into<String>,
        interview_type: InterviewType,
    ) -> Self {
        Self {
            id,
            interviewer_id,
            scheduled_date: scheduled_date.into(),
            scheduled_time: scheduled_time.into(),
            interview_type,
        }
    }

    /// Parsed calendar date, or `None` if the date is missing or malformed.
    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.scheduled_date.trim();
        let date_part = match raw.find('T') {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Parsed start time, or `None` if the time is missing or malformed.
    pub fn time(&self) -> Option<SlotTime> {
        SlotTime::from_clock_str(&self.scheduled_time)
    }

    /// Whether this interview occupies the given slot.
    pub fn occupies(&self, date: NaiveDate, time: SlotTime) -> bool {
        self.date() == Some(date) && self.time() == Some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_date_parsing() {
        let plain = Interview::new(1, 1, "2026-03-04", "10:00", InterviewType::Family);
        assert_eq!(plain.date(), Some(d("2026-03-04")));

        let datetime = Interview::new(2, 1, "2026-03-04T00:00:00Z", "10:00", InterviewType::Family);
        assert_eq!(datetime.date(), Some(d("2026-03-04")));

        let missing = Interview::new(3, 1, "", "10:00", InterviewType::Family);
        assert_eq!(missing.date(), None);

        let garbage = Interview::new(4, 1, "next tuesday", "10:00", InterviewType::Family);
        assert_eq!(garbage.date(), None);
    }

    #[test]
    fn test_time_parsing() {
        let i = Interview::new(1, 1, "2026-03-04", "10:30:00", InterviewType::Academic);
        assert_eq!(i.time(), Some("10:30".parse().unwrap()));

        let bad = Interview::new(2, 1, "2026-03-04", "", InterviewType::Academic);
        assert_eq!(bad.time(), None);
    }

    #[test]
    fn test_occupies() {
        let i = Interview::new(1, 1, "2026-03-04", "10:00", InterviewType::Student);
        assert!(i.occupies(d("2026-03-04"), "10:00".parse().unwrap()));
        assert!(!i.occupies(d("2026-03-04"), "10:30".parse().unwrap()));
        assert!(!i.occupies(d("2026-03-05"), "10:00".parse().unwrap()));
    }

    #[test]
    fn test_wire_format_with_missing_fields() {
        let json = r#"{"id":9,"interviewerId":4,"type":"PSYCHOLOGICAL"}"#;
        let i: Interview = serde_json::from_str(json).unwrap();
        assert_eq!(i.interview_type, InterviewType::Psychological);
        assert_eq!(i.date(), None);
        assert_eq!(i.time(), None);
    }

    #[test]
    fn test_unknown_or_missing_type_does_not_reject_batch() {
        let json = r#"[
            {"id":1,"interviewerId":4,"scheduledDate":"2026-03-04","scheduledTime":"10:00","type":"FAMILY"},
            {"id":2,"interviewerId":4,"scheduledDate":"2026-03-04","scheduledTime":"10:30","type":"GROUP"},
            {"id":3,"interviewerId":4,"scheduledDate":"2026-03-05","scheduledTime":"09:00"}
        ]"#;
        let batch: Vec<Interview> = serde_json::from_str(json).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].interview_type, InterviewType::Family);
        assert_eq!(batch[1].interview_type, InterviewType::Other);
        assert_eq!(batch[2].interview_type, InterviewType::Other);

        // Dates still parse, so these still occupy their slots.
        assert!(batch[1].occupies(d("2026-03-04"), "10:30".parse().unwrap()));
        assert_eq!(batch[2].date(), Some(d("2026-03-05")));
    }
}
