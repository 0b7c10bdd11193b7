//! Availability domain models.
//!
//! Provides the data types for interviewers, interviews, and the derived
//! weekly availability grid. External entities (`Interviewer`,
//! `Interview`) are read-only; derived entities (`AvailabilitySlot`,
//! `InterviewerSchedule`) are rebuilt on every projection.
//!
//! # Domain Mappings
//!
//! | u-availability | Admissions | Clinic | Recruiting |
//! |----------------|-----------|--------|------------|
//! | Interviewer | Staff member | Doctor | Hiring manager |
//! | Interview | Admission interview | Appointment | Candidate call |
//! | AvailabilitySlot | Bookable cell | Open appointment | Calendar slot |
//! | InterviewerSchedule | Weekly board row | Doctor roster | Panel availability |

mod calendar;
mod interview;
mod interviewer;
mod schedule;

pub use calendar::{SlotTime, WorkingHours};
pub use interview::{Interview, InterviewType};
pub use interviewer::{Interviewer, StaffRole};
pub use schedule::{AvailabilitySlot, InterviewerSchedule, UnavailableReason};
