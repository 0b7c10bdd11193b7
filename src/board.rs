//! Availability board: the derived state behind a weekly availability view.
//!
//! Holds the three projection inputs (roster, interviews, selected week)
//! and the derived schedules and statistics. Every trigger replaces one
//! input and recomputes the whole derived state; nothing is updated
//! incrementally or cached by partial input.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio::sync::watch;

use crate::config::AvailabilityConfig;
use crate::models::{Interview, InterviewerSchedule};
use crate::projection::{AvailabilityProjector, ProjectionContext, RollupStatistics, ScheduleFilter};
use crate::refresh::Roster;
use crate::validation::validate_inputs;

/// Derived weekly availability state.
#[derive(Debug, Clone)]
pub struct AvailabilityBoard {
    projector: AvailabilityProjector,
    busy_threshold: f64,
    roster: Roster,
    interviews: Vec<Interview>,
    context: ProjectionContext,
    schedules: Vec<InterviewerSchedule>,
    statistics: RollupStatistics,
}

impl AvailabilityBoard {
    /// Creates an empty board for the week containing `selected_week`,
    /// using the current local time.
    pub fn new(config: &AvailabilityConfig, selected_week: NaiveDate) -> Self {
        Self::with_context(config, ProjectionContext::current(selected_week))
    }

    /// Creates an empty board with an explicit context.
    pub fn with_context(config: &AvailabilityConfig, context: ProjectionContext) -> Self {
        Self {
            projector: AvailabilityProjector::from_config(config),
            busy_threshold: config.busy_threshold,
            roster: Roster::default(),
            interviews: Vec::new(),
            context,
            schedules: Vec::new(),
            statistics: RollupStatistics::default(),
        }
    }

    /// Replaces the roster and recomputes.
    pub fn apply_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.recompute();
    }

    /// Applies the latest published roster if it changed since last seen.
    ///
    /// Returns whether a recomputation happened.
    pub fn sync_roster(&mut self, rx: &mut watch::Receiver<Roster>) -> bool {
        // A closed channel keeps the last roster in place.
        if !rx.has_changed().unwrap_or(false) {
            return false;
        }
        let roster = rx.borrow_and_update().clone();
        self.apply_roster(roster);
        true
    }

    /// Replaces the interview list and recomputes.
    pub fn set_interviews(&mut self, interviews: Vec<Interview>) {
        self.interviews = interviews;
        self.recompute();
    }

    /// Moves to the week containing `day` and recomputes.
    pub fn select_week(&mut self, day: NaiveDate) {
        self.context = self.context.with_week(day);
        self.recompute();
    }

    /// Moves forward one week.
    pub fn next_week(&mut self) {
        self.select_week(self.context.selected_week + Duration::days(7));
    }

    /// Moves back one week.
    pub fn previous_week(&mut self) {
        self.select_week(self.context.selected_week - Duration::days(7));
    }

    /// Updates the clock used for past-date and upcoming checks and recomputes.
    pub fn refresh_clock(&mut self, now: NaiveDateTime) {
        self.context.now = now;
        self.recompute();
    }

    /// Current projection context.
    pub fn context(&self) -> &ProjectionContext {
        &self.context
    }

    /// Current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Projected schedules, in roster order.
    pub fn schedules(&self) -> &[InterviewerSchedule] {
        &self.schedules
    }

    /// Rollup statistics for the projected week.
    pub fn statistics(&self) -> &RollupStatistics {
        &self.statistics
    }

    /// Schedules passing `filter`. Does not recompute availability.
    pub fn filtered(&self, filter: &ScheduleFilter) -> Vec<&InterviewerSchedule> {
        filter.apply(&self.schedules)
    }

    fn recompute(&mut self) {
        if let Err(diagnostics) = validate_inputs(&self.roster, &self.interviews) {
            for d in &diagnostics {
                log::debug!("availability input: {}", d.message);
            }
        }
        self.schedules = self
            .projector
            .project(&self.roster, &self.interviews, &self.context);
        self.statistics =
            RollupStatistics::calculate_with_threshold(&self.schedules, self.busy_threshold);
    }
}
