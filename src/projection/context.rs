//! Projection context: the selected week and the current moment.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Inputs to a projection besides the roster and interview list.
///
/// `now` is injected rather than read inside the projector so that a
/// projection is a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionContext {
    /// Any day inside the week to project.
    pub selected_week: NaiveDate,
    /// Current local time (drives past-date and upcoming-window checks).
    pub now: NaiveDateTime,
}

impl ProjectionContext {
    /// Creates a context for the given week and moment.
    pub fn new(selected_week: NaiveDate, now: NaiveDateTime) -> Self {
        Self { selected_week, now }
    }

    /// Creates a context for the given week at the current local time.
    pub fn current(selected_week: NaiveDate) -> Self {
        Self::new(selected_week, Local::now().naive_local())
    }

    /// Sunday on or before the selected day.
    pub fn week_start(&self) -> NaiveDate {
        let offset = i64::from(self.selected_week.weekday().num_days_from_sunday());
        self.selected_week - Duration::days(offset)
    }

    /// The seven days of the selected week, Sunday first.
    pub fn week_days(&self) -> [NaiveDate; 7] {
        let start = self.week_start();
        std::array::from_fn(|i| start + Duration::days(i as i64))
    }

    /// Whether `date` lies in the calendar month of the selected day.
    pub fn in_selected_month(&self, date: NaiveDate) -> bool {
        date.year() == self.selected_week.year() && date.month() == self.selected_week.month()
    }

    /// Whether the day (taken at midnight) is strictly before `now`.
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date.and_time(NaiveTime::MIN) < self.now
    }

    /// Whether the day (taken at midnight) lies in `[now, now + 7 days]`.
    pub fn is_upcoming(&self, date: NaiveDate) -> bool {
        let at = date.and_time(NaiveTime::MIN);
        at >= self.now && at <= self.now + Duration::days(7)
    }

    /// Same moment, different week.
    pub fn with_week(mut self, selected_week: NaiveDate) -> Self {
        self.selected_week = selected_week;
        self
    }
}
