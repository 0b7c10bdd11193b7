//! Weekly availability projector.
//!
//! Builds one [`InterviewerSchedule`] per interviewer by evaluating every
//! (day, template time) cell of the selected week.
//!
//! # Algorithm
//!
//! For each cell the first matching rule decides:
//!
//! 1. Weekday not active: `NonWorkingDay` (all cells of that day, no
//!    further rules evaluated)
//! 2. An interview of this interviewer occupies (date, time):
//!    `AlreadyScheduled`, with the interview attached
//! 3. Time outside `[start, end]`: `OutsideWorkingHours`
//! 4. Day (at midnight) before now: `PastDate`
//! 5. Otherwise available
//!
//! Every cell is emitted regardless of outcome, so each schedule holds
//! exactly `7 x template.len()` slots.

use chrono::Datelike;

use crate::config::AvailabilityConfig;
use crate::models::{
    AvailabilitySlot, Interview, Interviewer, InterviewerSchedule, UnavailableReason,
};
use crate::policy::{RolePolicy, TimeSlotTemplate};

use super::ProjectionContext;

/// Projects rosters and interviews onto a weekly availability grid.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityProjector {
    template: TimeSlotTemplate,
    policy: RolePolicy,
}

impl AvailabilityProjector {
    /// Creates a projector with the standard template and built-in policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a projector from configuration.
    pub fn from_config(config: &AvailabilityConfig) -> Self {
        Self {
            template: config.time_slots.clone(),
            policy: config.role_policy(),
        }
    }

    /// Sets the time-slot template.
    pub fn with_template(mut self, template: TimeSlotTemplate) -> Self {
        self.template = template;
        self
    }

    /// Sets the role policy.
    pub fn with_policy(mut self, policy: RolePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Time-slot template in use.
    pub fn template(&self) -> &TimeSlotTemplate {
        &self.template
    }

    /// Projects every interviewer onto the selected week.
    ///
    /// Total and deterministic: empty inputs give an empty or trivially
    /// computed result, never an error.
    pub fn project(
        &self,
        interviewers: &[Interviewer],
        interviews: &[Interview],
        context: &ProjectionContext,
    ) -> Vec<InterviewerSchedule> {
        log::debug!(
            "projecting {} interviewers against {} interviews for week of {}",
            interviewers.len(),
            interviews.len(),
            context.week_start()
        );
        interviewers
            .iter()
            .map(|interviewer| self.project_one(interviewer, interviews, context))
            .collect()
    }

    /// Projects a single interviewer.
    pub fn project_one(
        &self,
        interviewer: &Interviewer,
        interviews: &[Interview],
        context: &ProjectionContext,
    ) -> InterviewerSchedule {
        let week_days = context.week_days();
        let own: Vec<&Interview> = interviews
            .iter()
            .filter(|i| i.interviewer_id == interviewer.id)
            .collect();

        let week_interviews: Vec<&Interview> = own
            .iter()
            .copied()
            .filter(|i| i.date().is_some_and(|d| week_days.contains(&d)))
            .collect();

        let total_interviews_this_month = own
            .iter()
            .filter(|i| i.date().is_some_and(|d| context.in_selected_month(d)))
            .count();

        let upcoming_interviews: Vec<Interview> = own
            .iter()
            .filter(|i| i.date().is_some_and(|d| context.is_upcoming(d)))
            .map(|&i| i.clone())
            .collect();

        let working_hours = self.policy.working_hours(&interviewer.role);
        let mut availability = Vec::with_capacity(week_days.len() * self.template.len());

        for &day in &week_days {
            if !working_hours.works_on(day.weekday()) {
                availability.extend(self.template.slots().iter().map(|&time| {
                    AvailabilitySlot::blocked(day, time, UnavailableReason::NonWorkingDay)
                }));
                continue;
            }

            for &time in self.template.slots() {
                let slot = if let Some(interview) =
                    week_interviews.iter().find(|i| i.occupies(day, time))
                {
                    AvailabilitySlot::occupied(day, time, (*interview).clone())
                } else if !working_hours.contains(time) {
                    AvailabilitySlot::blocked(day, time, UnavailableReason::OutsideWorkingHours)
                } else if context.is_past(day) {
                    AvailabilitySlot::blocked(day, time, UnavailableReason::PastDate)
                } else {
                    AvailabilitySlot::open(day, time)
                };
                availability.push(slot);
            }
        }

        InterviewerSchedule {
            interviewer: interviewer.clone(),
            specialties: self.policy.specialties(&interviewer.role),
            max_weekly_interviews: self.policy.max_weekly_interviews(&interviewer.role),
            working_hours,
            current_load: week_interviews.len(),
            availability,
            upcoming_interviews,
            total_interviews_this_month,
        }
    }
}
