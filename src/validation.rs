//! Input diagnostics for availability projection.
//!
//! Checks roster and interview data before projecting. Detects:
//! - Duplicate interviewer and interview IDs
//! - Interviews assigned to interviewers missing from the roster
//! - Missing or malformed dates and times
//! - Two interviews in the same slot for one interviewer
//!
//! Diagnostics never block a projection: malformed interviews simply
//! fall out of every date window. They exist so callers can log or
//! surface data problems.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::{Interview, Interviewer, SlotTime};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An interview references an interviewer not in the roster.
    UnknownInterviewer,
    /// Interview date is missing or not an ISO date.
    MalformedDate,
    /// Interview time is missing or not `HH:MM`.
    MalformedTime,
    /// Two interviews occupy the same slot for one interviewer.
    DoubleBooking,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates roster and interview data.
///
/// Checks:
/// 1. No duplicate interviewer IDs
/// 2. No duplicate interview IDs
/// 3. Every interview references a roster interviewer
/// 4. Every interview has a parseable date and time
/// 5. No interviewer has two interviews in the same (date, time)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_inputs(interviewers: &[Interviewer], interviews: &[Interview]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut interviewer_ids = HashSet::new();
    for i in interviewers {
        if !interviewer_ids.insert(i.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate interviewer ID: {}", i.id),
            ));
        }
    }

    let mut interview_ids = HashSet::new();
    let mut occupied: HashMap<(i64, NaiveDate, SlotTime), i64> = HashMap::new();

    for interview in interviews {
        if !interview_ids.insert(interview.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate interview ID: {}", interview.id),
            ));
        }

        if !interviewer_ids.contains(&interview.interviewer_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownInterviewer,
                format!(
                    "Interview {} references unknown interviewer {}",
                    interview.id, interview.interviewer_id
                ),
            ));
        }

        let date = interview.date();
        if date.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDate,
                format!(
                    "Interview {} has malformed date '{}'",
                    interview.id, interview.scheduled_date
                ),
            ));
        }

        let time = interview.time();
        if time.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Interview {} has malformed time '{}'",
                    interview.id, interview.scheduled_time
                ),
            ));
        }

        if let (Some(date), Some(time)) = (date, time) {
            let key = (interview.interviewer_id, date, time);
            if let Some(&first) = occupied.get(&key) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DoubleBooking,
                    format!(
                        "Interviews {} and {} both occupy {} {} for interviewer {}",
                        first, interview.id, date, time, interview.interviewer_id
                    ),
                ));
            } else {
                occupied.insert(key, interview.id);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterviewType, StaffRole};

    fn sample_roster() -> Vec<Interviewer> {
        vec![
            Interviewer::new(1, StaffRole::Coordinator).with_name("Rosa", "Diaz"),
            Interviewer::new(2, StaffRole::Psychologist).with_name("Ana", "Rojas"),
        ]
    }

    fn interview(id: i64, interviewer: i64, date: &str, time: &str) -> Interview {
        Interview::new(id, interviewer, date, time, InterviewType::Family)
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let interviews = vec![
            interview(1, 1, "2026-03-02", "09:00"),
            interview(2, 2, "2026-03-02", "09:00"),
        ];
        assert!(validate_inputs(&sample_roster(), &interviews).is_ok());
    }

    #[test]
    fn test_duplicate_interviewer_id() {
        let roster = vec![
            Interviewer::new(1, StaffRole::Teacher),
            Interviewer::new(1, StaffRole::Admin),
        ];
        let errors = validate_inputs(&roster, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("interviewer")));
    }

    #[test]
    fn test_duplicate_interview_id() {
        let interviews = vec![
            interview(5, 1, "2026-03-02", "09:00"),
            interview(5, 1, "2026-03-03", "09:00"),
        ];
        assert_eq!(
            kinds(validate_inputs(&sample_roster(), &interviews)),
            vec![ValidationErrorKind::DuplicateId]
        );
    }

    #[test]
    fn test_unknown_interviewer() {
        let interviews = vec![interview(1, 99, "2026-03-02", "09:00")];
        assert_eq!(
            kinds(validate_inputs(&sample_roster(), &interviews)),
            vec![ValidationErrorKind::UnknownInterviewer]
        );
    }

    #[test]
    fn test_malformed_date_and_time() {
        let interviews = vec![interview(1, 1, "", "nine")];
        assert_eq!(
            kinds(validate_inputs(&sample_roster(), &interviews)),
            vec![
                ValidationErrorKind::MalformedDate,
                ValidationErrorKind::MalformedTime
            ]
        );
    }

    #[test]
    fn test_double_booking() {
        let interviews = vec![
            interview(1, 1, "2026-03-02", "09:00"),
            interview(2, 1, "2026-03-02", "09:00:00"),
        ];
        let errors = validate_inputs(&sample_roster(), &interviews).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DoubleBooking);
        assert!(errors[0].message.contains("Interviews 1 and 2"));
    }
}
