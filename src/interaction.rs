//! Slot click contract.
//!
//! Maps a click on a grid cell to the caller-supplied side effect:
//! an available slot requests a new interview, an occupied slot opens
//! the interview that occupies it, any other cell does nothing.

use chrono::NaiveDate;

use crate::models::{AvailabilitySlot, Interview, InterviewerSchedule, SlotTime};

/// What a click on a slot should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAction {
    /// Book a new interview in this cell.
    ScheduleInterview {
        interviewer_id: i64,
        date: NaiveDate,
        time: SlotTime,
    },
    /// Open the interview occupying this cell.
    ViewInterview(Interview),
}

impl SlotAction {
    /// Action for a click on `slot` in `schedule`, if any.
    pub fn for_slot(schedule: &InterviewerSchedule, slot: &AvailabilitySlot) -> Option<Self> {
        if slot.available {
            return Some(SlotAction::ScheduleInterview {
                interviewer_id: schedule.interviewer_id(),
                date: slot.date,
                time: slot.time,
            });
        }
        slot.conflicting_interview
            .clone()
            .map(SlotAction::ViewInterview)
    }
}

/// Caller-supplied click handlers.
pub trait SlotHandler {
    /// Called for a click on an available slot.
    fn on_schedule_interview(&mut self, interviewer_id: i64, date: NaiveDate, time: SlotTime);

    /// Called for a click on an occupied slot.
    fn on_view_interview(&mut self, interview: &Interview);
}

/// Routes a click to `handler`. Returns whether a handler was invoked.
pub fn dispatch_click<H: SlotHandler + ?Sized>(
    schedule: &InterviewerSchedule,
    slot: &AvailabilitySlot,
    handler: &mut H,
) -> bool {
    match SlotAction::for_slot(schedule, slot) {
        Some(SlotAction::ScheduleInterview {
            interviewer_id,
            date,
            time,
        }) => {
            handler.on_schedule_interview(interviewer_id, date, time);
            true
        }
        Some(SlotAction::ViewInterview(interview)) => {
            handler.on_view_interview(&interview);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterviewType, Interviewer, StaffRole, UnavailableReason, WorkingHours};

    #[derive(Default)]
    struct Recorder {
        scheduled: Vec<(i64, NaiveDate, SlotTime)>,
        viewed: Vec<i64>,
    }

    impl SlotHandler for Recorder {
        fn on_schedule_interview(&mut self, interviewer_id: i64, date: NaiveDate, time: SlotTime) {
            self.scheduled.push((interviewer_id, date, time));
        }

        fn on_view_interview(&mut self, interview: &Interview) {
            self.viewed.push(interview.id);
        }
    }

    fn schedule() -> InterviewerSchedule {
        InterviewerSchedule {
            interviewer: Interviewer::new(42, StaffRole::Coordinator),
            specialties: Default::default(),
            working_hours: WorkingHours::office_default(),
            current_load: 0,
            max_weekly_interviews: 25,
            availability: Vec::new(),
            upcoming_interviews: Vec::new(),
            total_interviews_this_month: 0,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    fn time() -> SlotTime {
        "10:00".parse().unwrap()
    }

    #[test]
    fn test_available_slot_schedules() {
        let mut rec = Recorder::default();
        let slot = AvailabilitySlot::open(date(), time());
        assert!(dispatch_click(&schedule(), &slot, &mut rec));
        assert_eq!(rec.scheduled, vec![(42, date(), time())]);
        assert!(rec.viewed.is_empty());
    }

    #[test]
    fn test_occupied_slot_views() {
        let mut rec = Recorder::default();
        let interview = Interview::new(7, 42, "2026-03-04", "10:00", InterviewType::Family);
        let slot = AvailabilitySlot::occupied(date(), time(), interview);
        assert!(dispatch_click(&schedule(), &slot, &mut rec));
        assert_eq!(rec.viewed, vec![7]);
        assert!(rec.scheduled.is_empty());
    }

    #[test]
    fn test_blocked_slot_does_nothing() {
        let mut rec = Recorder::default();
        let slot = AvailabilitySlot::blocked(date(), time(), UnavailableReason::PastDate);
        assert!(!dispatch_click(&schedule(), &slot, &mut rec));
        assert_eq!(SlotAction::for_slot(&schedule(), &slot), None);
        assert!(rec.scheduled.is_empty() && rec.viewed.is_empty());
    }
}
