//! End-to-end: roster refresh -> board -> statistics, filter and clicks.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use u_availability::board::AvailabilityBoard;
use u_availability::config::AvailabilityConfig;
use u_availability::interaction::{dispatch_click, SlotAction, SlotHandler};
use u_availability::models::{
    Interview, InterviewType, Interviewer, SlotTime, StaffRole, UnavailableReason,
};
use u_availability::projection::{ProjectionContext, ScheduleFilter};
use u_availability::refresh::{RefreshOutcome, RosterRefresher, RosterSource};
use u_availability::Result;

struct Directory(Vec<Interviewer>);

#[async_trait]
impl RosterSource for Directory {
    async fn fetch_staff_roster(&self) -> Result<Vec<Interviewer>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct Clicks {
    booked: Vec<(i64, NaiveDate, SlotTime)>,
    opened: Vec<i64>,
}

impl SlotHandler for Clicks {
    fn on_schedule_interview(&mut self, interviewer_id: i64, date: NaiveDate, time: SlotTime) {
        self.booked.push((interviewer_id, date, time));
    }

    fn on_view_interview(&mut self, interview: &Interview) {
        self.opened.push(interview.id);
    }
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn t(s: &str) -> SlotTime {
    s.parse().unwrap()
}

#[tokio::test]
async fn weekly_board_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = AvailabilityConfig::from_json_str(
        r#"{ "timeSlots": ["09:00", "10:00", "15:00", "16:30"] }"#,
    )
    .unwrap();

    let refresher = RosterRefresher::new(Arc::new(Directory(vec![
        Interviewer::new(1, StaffRole::Coordinator).with_name("Rosa", "Diaz"),
        Interviewer::new(2, StaffRole::Psychologist).with_name("Ana", "Rojas"),
        Interviewer::new(3, StaffRole::Other("GUARDIAN".into())).with_name("Pia", "Leal"),
    ])));
    let mut rx = refresher.subscribe();

    let mut board = AvailabilityBoard::with_context(
        &config,
        ProjectionContext::new(d("2026-03-04"), at("2026-02-20 09:00")),
    );
    board.set_interviews(vec![Interview::new(
        10,
        1,
        "2026-03-04",
        "10:00",
        InterviewType::Family,
    )]);

    assert!(matches!(
        refresher.refresh().await,
        RefreshOutcome::Applied { interviewers: 2, .. }
    ));
    assert!(board.sync_roster(&mut rx));

    // Slot-count invariant and the weekly scenario.
    let rosa = &board.schedules()[0];
    assert_eq!(rosa.availability.len(), 28);
    assert_eq!(rosa.current_load, 1);

    let wednesday = d("2026-03-04");
    let booked = rosa.slot_at(wednesday, t("10:00")).unwrap();
    assert_eq!(booked.reason, Some(UnavailableReason::AlreadyScheduled));
    assert_eq!(rosa.slots_on(wednesday).filter(|s| s.available).count(), 3);
    for weekend in [d("2026-03-01"), d("2026-03-07")] {
        assert!(rosa
            .slots_on(weekend)
            .all(|s| s.reason == Some(UnavailableReason::NonWorkingDay)));
    }

    // 2 interviewers x 28 slots, 20 open weekday slots each, minus one booking.
    let stats = board.statistics();
    assert_eq!(stats.total_slots, 56);
    assert_eq!(stats.available_slots, 39);
    assert_eq!(stats.busy_interviewers, 0);

    // Clicks route to the right callbacks.
    let mut clicks = Clicks::default();
    assert!(dispatch_click(rosa, booked, &mut clicks));
    let open = rosa.slot_at(wednesday, t("15:00")).unwrap();
    assert_eq!(
        SlotAction::for_slot(rosa, open),
        Some(SlotAction::ScheduleInterview {
            interviewer_id: 1,
            date: wednesday,
            time: t("15:00"),
        })
    );
    assert!(dispatch_click(rosa, open, &mut clicks));
    assert_eq!(clicks.opened, vec![10]);
    assert_eq!(clicks.booked, vec![(1, wednesday, t("15:00"))]);

    // Filtering does not recompute or mutate.
    let snapshot = board.schedules().to_vec();
    let filter = ScheduleFilter::all()
        .with_role(StaffRole::Psychologist)
        .with_specialty(InterviewType::Student);
    let none = board.filtered(&filter);
    assert!(none.is_empty());
    assert_eq!(board.schedules(), snapshot.as_slice());
}
