//! Filtering of projected schedules.
//!
//! Filtering never recomputes availability: it selects from schedules
//! that were already projected and leaves them untouched.

use crate::models::{InterviewType, InterviewerSchedule, StaffRole};

/// Role, specialty and name criteria. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    /// Keep only this role.
    pub role: Option<StaffRole>,
    /// Keep only interviewers handling this interview kind.
    pub specialty: Option<InterviewType>,
    /// Case-insensitive substring of the display name, used as given.
    /// Empty matches all.
    pub search_term: String,
}

impl ScheduleFilter {
    /// A filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts to one role.
    pub fn with_role(mut self, role: StaffRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Restricts to one specialty.
    pub fn with_specialty(mut self, specialty: InterviewType) -> Self {
        self.specialty = Some(specialty);
        self
    }

    /// Sets the name search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Whether a schedule passes every criterion.
    pub fn matches(&self, schedule: &InterviewerSchedule) -> bool {
        if let Some(role) = &self.role {
            if &schedule.interviewer.role != role {
                return false;
            }
        }
        if let Some(specialty) = self.specialty {
            if !schedule.handles(specialty) {
                return false;
            }
        }
        if self.search_term.is_empty() {
            return true;
        }
        schedule
            .interviewer
            .display_name()
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }

    /// Schedules that pass the filter, in input order.
    pub fn apply<'a>(&self, schedules: &'a [InterviewerSchedule]) -> Vec<&'a InterviewerSchedule> {
        schedules.iter().filter(|s| self.matches(s)).collect()
    }
}
