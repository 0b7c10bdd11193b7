//! Rollup statistics over a projected week.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Interviewers | Number of schedules |
//! | Available Slots | Bookable cells across all schedules |
//! | Total Slots | All cells across all schedules |
//! | Availability Rate | available / total x 100 (0 when total is 0) |
//! | Busy Interviewers | Schedules with load >= threshold x weekly cap |

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BUSY_THRESHOLD;
use crate::models::InterviewerSchedule;

/// Aggregate counts for a projected week.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupStatistics {
    /// Number of interviewer schedules.
    pub total_interviewers: usize,
    /// Bookable slots across all schedules.
    pub available_slots: usize,
    /// All slots across all schedules.
    pub total_slots: usize,
    /// Percentage of slots that are bookable (0.0..=100.0).
    pub availability_rate: f64,
    /// Interviewers at or above the busy threshold.
    pub busy_interviewers: usize,
}

impl RollupStatistics {
    /// Computes statistics with the default 80% busy threshold.
    pub fn calculate(schedules: &[InterviewerSchedule]) -> Self {
        Self::calculate_with_threshold(schedules, DEFAULT_BUSY_THRESHOLD)
    }

    /// Computes statistics with a custom busy threshold.
    pub fn calculate_with_threshold(schedules: &[InterviewerSchedule], busy_threshold: f64) -> Self {
        let mut available_slots = 0;
        let mut total_slots = 0;
        let mut busy_interviewers = 0;

        for schedule in schedules {
            available_slots += schedule.available_slot_count();
            total_slots += schedule.availability.len();
            if schedule.is_busy(busy_threshold) {
                busy_interviewers += 1;
            }
        }

        let availability_rate = if total_slots == 0 {
            0.0
        } else {
            available_slots as f64 / total_slots as f64 * 100.0
        };

        Self {
            total_interviewers: schedules.len(),
            available_slots,
            total_slots,
            availability_rate,
            busy_interviewers,
        }
    }

    /// Availability rate rounded to the nearest whole percent.
    pub fn rounded_rate(&self) -> u32 {
        self.availability_rate.round() as u32
    }
}
