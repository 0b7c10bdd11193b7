//! Derived availability grid.
//!
//! An [`InterviewerSchedule`] is the full weekly projection for one
//! interviewer: one [`AvailabilitySlot`] per (day, template time) for all
//! seven days of the week, plus load statistics. Schedules are rebuilt
//! from scratch on every recomputation and carry no identity beyond
//! (interviewer, date, time).

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Interview, InterviewType, Interviewer, SlotTime, WorkingHours};

/// Why a slot cannot be booked.
///
/// Variants are listed in evaluation precedence: the first that applies wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// Weekday is not among the interviewer's active days.
    NonWorkingDay,
    /// An interview already occupies the slot.
    AlreadyScheduled,
    /// Slot time is outside the daily working window.
    OutsideWorkingHours,
    /// Day has already started.
    PastDate,
}

impl UnavailableReason {
    /// Human-readable explanation.
    pub fn message(&self) -> &'static str {
        match self {
            UnavailableReason::NonWorkingDay => "does not work this day",
            UnavailableReason::AlreadyScheduled => "interview already scheduled",
            UnavailableReason::OutsideWorkingHours => "outside working hours",
            UnavailableReason::PastDate => "date in the past",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One (date, time) cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    /// Calendar day.
    pub date: NaiveDate,
    /// Template start time.
    pub time: SlotTime,
    /// Whether an interview can be booked here.
    pub available: bool,
    /// Set iff `available` is false.
    pub reason: Option<UnavailableReason>,
    /// The interview occupying this slot, if any.
    pub conflicting_interview: Option<Interview>,
}

impl AvailabilitySlot {
    /// A bookable slot.
    pub fn open(date: NaiveDate, time: SlotTime) -> Self {
        Self {
            date,
            time,
            available: true,
            reason: None,
            conflicting_interview: None,
        }
    }

    /// An unavailable slot without a conflicting interview.
    pub fn blocked(date: NaiveDate, time: SlotTime, reason: UnavailableReason) -> Self {
        Self {
            date,
            time,
            available: false,
            reason: Some(reason),
            conflicting_interview: None,
        }
    }

    /// A slot occupied by an existing interview.
    pub fn occupied(date: NaiveDate, time: SlotTime, interview: Interview) -> Self {
        Self {
            date,
            time,
            available: false,
            reason: Some(UnavailableReason::AlreadyScheduled),
            conflicting_interview: Some(interview),
        }
    }
}

/// Weekly availability and load of one interviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewerSchedule {
    /// Directory record.
    #[serde(flatten)]
    pub interviewer: Interviewer,
    /// Interview kinds this interviewer handles.
    pub specialties: BTreeSet<InterviewType>,
    /// Working pattern applied to the grid.
    pub working_hours: WorkingHours,
    /// Interviews in the selected week.
    pub current_load: usize,
    /// Weekly interview cap.
    pub max_weekly_interviews: u32,
    /// Seven days x template slots, ordered by day then time.
    pub availability: Vec<AvailabilitySlot>,
    /// Interviews within seven days of "now" (independent of the selected week).
    pub upcoming_interviews: Vec<Interview>,
    /// Interviews in the calendar month of the selected week.
    pub total_interviews_this_month: usize,
}

impl InterviewerSchedule {
    /// Interviewer ID.
    #[inline]
    pub fn interviewer_id(&self) -> i64 {
        self.interviewer.id
    }

    /// Number of bookable slots.
    pub fn available_slot_count(&self) -> usize {
        self.availability.iter().filter(|s| s.available).count()
    }

    /// Slots for one calendar day, in template order.
    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = &AvailabilitySlot> {
        self.availability.iter().filter(move |s| s.date == date)
    }

    /// Finds the slot at (date, time).
    pub fn slot_at(&self, date: NaiveDate, time: SlotTime) -> Option<&AvailabilitySlot> {
        self.availability
            .iter()
            .find(|s| s.date == date && s.time == time)
    }

    /// Weekly load relative to the cap (0.0 when the cap is zero).
    pub fn load_ratio(&self) -> f64 {
        if self.max_weekly_interviews == 0 {
            return 0.0;
        }
        self.current_load as f64 / f64::from(self.max_weekly_interviews)
    }

    /// Whether load has reached `threshold` x cap.
    pub fn is_busy(&self, threshold: f64) -> bool {
        self.current_load as f64 >= threshold * f64::from(self.max_weekly_interviews)
    }

    /// Whether this interviewer handles the given interview kind.
    pub fn handles(&self, interview_type: InterviewType) -> bool {
        self.specialties.contains(&interview_type)
    }
}
