//! Weekly availability projection, rollup statistics, and filtering.
//!
//! # Pipeline
//!
//! ```text
//! roster + interviews + ProjectionContext
//!     -> AvailabilityProjector::project -> Vec<InterviewerSchedule>
//!         -> RollupStatistics::calculate
//!         -> ScheduleFilter::apply
//! ```
//!
//! Every stage is a pure function of its inputs. Projections are total:
//! they are recomputed in full on each trigger and never cached.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_availability::models::{Interviewer, StaffRole};
//! use u_availability::projection::{AvailabilityProjector, ProjectionContext, RollupStatistics};
//!
//! let week = NaiveDate::from_ymd_opt(2030, 3, 6).unwrap();
//! let now = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let roster = vec![Interviewer::new(1, StaffRole::Coordinator)];
//!
//! let schedules = AvailabilityProjector::new()
//!     .project(&roster, &[], &ProjectionContext::new(week, now));
//! let stats = RollupStatistics::calculate(&schedules);
//! assert_eq!(stats.total_interviewers, 1);
//! ```

mod context;
mod filter;
mod projector;
mod stats;

pub use context::ProjectionContext;
pub use filter::ScheduleFilter;
pub use projector::AvailabilityProjector;
pub use stats::RollupStatistics;
