//! Availability configuration.
//!
//! Loaded from JSON. Every field has a default, so an empty object `{}`
//! yields the built-in behavior: the standard slot template, 09:00-17:00
//! Monday through Friday for every role, a busy threshold of 80% of the
//! weekly cap, and a five-minute roster refresh.
//!
//! ```json
//! {
//!   "timeSlots": ["09:00", "10:00", "15:00"],
//!   "workingHoursOverrides": {
//!     "PSYCHOLOGIST": { "start": "08:00", "end": "13:00", "activeDays": ["Mon", "Wed"] }
//!   },
//!   "busyThreshold": 0.75
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};
use crate::models::{StaffRole, WorkingHours};
use crate::policy::{RolePolicy, TimeSlotTemplate};

/// Fraction of the weekly cap at which an interviewer counts as busy.
pub const DEFAULT_BUSY_THRESHOLD: f64 = 0.8;

/// Seconds between background roster refreshes.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailabilityConfig {
    /// Candidate start times evaluated per day.
    pub time_slots: TimeSlotTemplate,
    /// Working pattern for roles without an override.
    pub default_working_hours: WorkingHours,
    /// Per-role working patterns.
    pub working_hours_overrides: BTreeMap<StaffRole, WorkingHours>,
    /// Busy when `current_load >= busy_threshold * max_weekly_interviews`.
    pub busy_threshold: f64,
    /// Roster refresh period (seconds).
    pub refresh_interval_secs: u64,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            time_slots: TimeSlotTemplate::standard(),
            default_working_hours: WorkingHours::office_default(),
            working_hours_overrides: BTreeMap::new(),
            busy_threshold: DEFAULT_BUSY_THRESHOLD,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl AvailabilityConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::debug!(
            "loaded availability config from {}: {} slots, {} overrides",
            path.display(),
            config.time_slots.len(),
            config.working_hours_overrides.len()
        );
        Ok(config)
    }

    /// Rejects configurations the projector cannot use meaningfully.
    pub fn validate(&self) -> Result<()> {
        if self.time_slots.is_empty() {
            return Err(AvailabilityError::InvalidConfig(
                "time slot template is empty".into(),
            ));
        }
        if !(self.busy_threshold > 0.0 && self.busy_threshold.is_finite()) {
            return Err(AvailabilityError::InvalidConfig(format!(
                "busy threshold must be positive, got {}",
                self.busy_threshold
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(AvailabilityError::InvalidConfig(
                "refresh interval must be at least one second".into(),
            ));
        }
        self.default_working_hours.validate()?;
        for hours in self.working_hours_overrides.values() {
            hours.validate()?;
        }
        Ok(())
    }

    /// Role policy with this configuration's working hours applied.
    pub fn role_policy(&self) -> RolePolicy {
        self.working_hours_overrides.iter().fold(
            RolePolicy::new().with_default_hours(self.default_working_hours.clone()),
            |policy, (role, hours)| policy.with_hours_override(role.clone(), hours.clone()),
        )
    }

    /// Roster refresh period.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
