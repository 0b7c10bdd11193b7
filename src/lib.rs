//! Interviewer availability for the U-Engine ecosystem.
//!
//! Projects a staff roster and a list of scheduled admission interviews
//! onto a weekly availability grid, with load statistics, filtering, and
//! single-flight roster refresh.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interviewer`, `Interview`, `SlotTime`,
//!   `WorkingHours`, `AvailabilitySlot`, `InterviewerSchedule`
//! - **`policy`**: Role lookups (specialties, weekly caps, working hours)
//!   and the time-slot template
//! - **`projection`**: `AvailabilityProjector`, `RollupStatistics`, `ScheduleFilter`
//! - **`board`**: Derived view state recomputed on every input change
//! - **`refresh`**: Roster fetching with stale-result suppression
//! - **`interaction`**: Slot click contract
//! - **`validation`**: Input diagnostics (duplicate IDs, malformed dates)
//! - **`config`**: JSON configuration
//!
//! # Architecture
//!
//! Projection is a pure, synchronous, total function of
//! (roster, interviews, week, now). The only asynchronous piece is roster
//! refresh, which publishes snapshots through a `tokio::sync::watch`
//! channel that the board consumes.

pub mod board;
pub mod config;
pub mod error;
pub mod interaction;
pub mod models;
pub mod policy;
pub mod projection;
pub mod refresh;
pub mod validation;

pub use error::{AvailabilityError, Result};
