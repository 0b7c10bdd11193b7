//! Static role policies and the time-slot template.
//!
//! Each lookup is a total function over [`StaffRole`]: unrecognized roles
//! fall through to a default branch rather than failing.
//!
//! | Role | Specialties | Weekly cap |
//! |------|-------------|-----------|
//! | Psychologist | Psychological, Behavioral | 12 |
//! | CycleDirector | Family, Academic, Individual | 15 |
//! | Teacher | Academic, Student | 15 |
//! | Coordinator | Family, Student, Academic, Behavioral, Individual | 25 |
//! | Admin | Family, Individual | 30 |
//! | Other | Individual | 20 |
//!
//! Working hours are 09:00-17:00, Monday through Friday, for every role.
//! [`RolePolicy`] layers per-role overrides on top of that constant.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{InterviewType, SlotTime, StaffRole, WorkingHours};

/// Weekly cap for roles without an explicit entry.
pub const DEFAULT_MAX_WEEKLY_INTERVIEWS: u32 = 20;

/// Interview kinds handled by a role.
pub fn specialties_for_role(role: &StaffRole) -> BTreeSet<InterviewType> {
    use InterviewType::*;
    let kinds: &[InterviewType] = match role {
        StaffRole::Psychologist => &[Psychological, Behavioral],
        StaffRole::CycleDirector => &[Family, Academic, Individual],
        StaffRole::Teacher => &[Academic, Student],
        StaffRole::Coordinator => &[Family, Student, Academic, Behavioral, Individual],
        StaffRole::Admin => &[Family, Individual],
        StaffRole::Other(_) => &[Individual],
    };
    kinds.iter().copied().collect()
}

/// Maximum interviews per week for a role.
pub fn max_weekly_interviews_for_role(role: &StaffRole) -> u32 {
    match role {
        StaffRole::Psychologist => 12,
        StaffRole::CycleDirector | StaffRole::Teacher => 15,
        StaffRole::Coordinator => 25,
        StaffRole::Admin => 30,
        StaffRole::Other(_) => DEFAULT_MAX_WEEKLY_INTERVIEWS,
    }
}

/// Default working pattern for a role.
pub fn working_hours_for_role(_role: &StaffRole) -> WorkingHours {
    WorkingHours::office_default()
}

/// Ordered list of candidate interview start times evaluated per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SlotTime>", into = "Vec<SlotTime>")]
pub struct TimeSlotTemplate {
    slots: Vec<SlotTime>,
}

impl TimeSlotTemplate {
    /// Creates a template from the given times, sorted and deduplicated.
    pub fn new(mut slots: Vec<SlotTime>) -> Self {
        slots.sort();
        slots.dedup();
        Self { slots }
    }

    /// Half-hourly morning and afternoon blocks, 09:00-16:30.
    pub fn standard() -> Self {
        const STANDARD: [(u8, u8); 13] = [
            (9, 0),
            (9, 30),
            (10, 0),
            (10, 30),
            (11, 0),
            (11, 30),
            (12, 0),
            (14, 0),
            (14, 30),
            (15, 0),
            (15, 30),
            (16, 0),
            (16, 30),
        ];
        Self::new(
            STANDARD
                .iter()
                .filter_map(|&(h, m)| SlotTime::new(h, m).ok())
                .collect(),
        )
    }

    /// Template times in order.
    pub fn slots(&self) -> &[SlotTime] {
        &self.slots
    }

    /// Number of times per day.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the template has no times.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl From<Vec<SlotTime>> for TimeSlotTemplate {
    fn from(slots: Vec<SlotTime>) -> Self {
        Self::new(slots)
    }
}

impl From<TimeSlotTemplate> for Vec<SlotTime> {
    fn from(template: TimeSlotTemplate) -> Self {
        template.slots
    }
}

impl Default for TimeSlotTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// Role policy lookups with optional per-role working-hours overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RolePolicy {
    default_hours: Option<WorkingHours>,
    hours_overrides: BTreeMap<StaffRole, WorkingHours>,
}

impl RolePolicy {
    /// Policy with built-in defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working pattern used for roles without an override.
    pub fn with_default_hours(mut self, hours: WorkingHours) -> Self {
        self.default_hours = Some(hours);
        self
    }

    /// Sets a working pattern for one role.
    pub fn with_hours_override(mut self, role: StaffRole, hours: WorkingHours) -> Self {
        self.hours_overrides.insert(role, hours);
        self
    }

    /// Interview kinds handled by a role.
    pub fn specialties(&self, role: &StaffRole) -> BTreeSet<InterviewType> {
        specialties_for_role(role)
    }

    /// Weekly cap for a role.
    pub fn max_weekly_interviews(&self, role: &StaffRole) -> u32 {
        max_weekly_interviews_for_role(role)
    }

    /// Working pattern for a role: override, then configured default,
    /// then the built-in constant.
    pub fn working_hours(&self, role: &StaffRole) -> WorkingHours {
        if let Some(hours) = self.hours_overrides.get(role) {
            return hours.clone();
        }
        match &self.default_hours {
            Some(hours) => hours.clone(),
            None => working_hours_for_role(role),
        }
    }
}
