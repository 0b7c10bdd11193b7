//! Interviewer model.
//!
//! Interviewers are staff members drawn from the external user directory.
//! They are read-only here: the roster is fetched, filtered to
//! interview-capable roles, and projected into weekly schedules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A staff member who can conduct admission interviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interviewer {
    /// Directory identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Staff role (drives specialty, capacity and working-hours policy).
    pub role: StaffRole,
    /// Contact address.
    pub email: String,
}

/// Staff role classification.
///
/// Serialized as the directory's upper snake case code. Codes the crate
/// does not know are kept verbatim in [`StaffRole::Other`] and fall back
/// to default policy values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StaffRole {
    /// School administration.
    Admin,
    /// Director of an academic cycle.
    CycleDirector,
    /// Admissions coordinator (generalist).
    Coordinator,
    /// School psychologist (deep, long interviews).
    Psychologist,
    /// Classroom teacher.
    Teacher,
    /// Unrecognized directory code.
    Other(String),
}

impl StaffRole {
    /// Directory code for this role.
    pub fn code(&self) -> &str {
        match self {
            StaffRole::Admin => "ADMIN",
            StaffRole::CycleDirector => "CYCLE_DIRECTOR",
            StaffRole::Coordinator => "COORDINATOR",
            StaffRole::Psychologist => "PSYCHOLOGIST",
            StaffRole::Teacher => "TEACHER",
            StaffRole::Other(code) => code,
        }
    }

    /// Parses a directory code (case-insensitive).
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => StaffRole::Admin,
            "CYCLE_DIRECTOR" => StaffRole::CycleDirector,
            "COORDINATOR" => StaffRole::Coordinator,
            "PSYCHOLOGIST" => StaffRole::Psychologist,
            "TEACHER" => StaffRole::Teacher,
            _ => StaffRole::Other(code.to_string()),
        }
    }

    /// Whether staff with this role may be assigned interviews.
    pub fn is_interview_capable(&self) -> bool {
        !matches!(self, StaffRole::Other(_))
    }
}

impl From<String> for StaffRole {
    fn from(code: String) -> Self {
        StaffRole::from_code(&code)
    }
}

impl From<StaffRole> for String {
    fn from(role: StaffRole) -> Self {
        role.code().to_string()
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Interviewer {
    /// Creates an interviewer with the given ID and role.
    pub fn new(id: i64, role: StaffRole) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            role,
            email: String::new(),
        }
    }

    /// Sets the given and family names.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// "First Last", trimmed when either part is empty.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interviewer_builder() {
        let i = Interviewer::new(7, StaffRole::Psychologist)
            .with_name("Ana", "Rojas")
            .with_email("ana.rojas@school.test");

        assert_eq!(i.id, 7);
        assert_eq!(i.role, StaffRole::Psychologist);
        assert_eq!(i.display_name(), "Ana Rojas");
        assert_eq!(i.email, "ana.rojas@school.test");
    }

    #[test]
    fn test_display_name_missing_part() {
        let i = Interviewer::new(1, StaffRole::Teacher).with_name("Luis", "");
        assert_eq!(i.display_name(), "Luis");
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(StaffRole::from_code("CYCLE_DIRECTOR"), StaffRole::CycleDirector);
        assert_eq!(StaffRole::from_code("psychologist"), StaffRole::Psychologist);
        assert_eq!(
            StaffRole::from_code("JANITOR"),
            StaffRole::Other("JANITOR".into())
        );
        assert_eq!(StaffRole::Coordinator.code(), "COORDINATOR");
    }

    #[test]
    fn test_interview_capable() {
        assert!(StaffRole::Teacher.is_interview_capable());
        assert!(StaffRole::Admin.is_interview_capable());
        assert!(!StaffRole::Other("APODERADO".into()).is_interview_capable());
    }

    #[test]
    fn test_interviewer_wire_format() {
        let json = r#"{"id":3,"firstName":"Marta","lastName":"Soto","role":"COORDINATOR","email":"m@s.test"}"#;
        let i: Interviewer = serde_json::from_str(json).unwrap();
        assert_eq!(i.role, StaffRole::Coordinator);
        assert_eq!(i.display_name(), "Marta Soto");

        let out = serde_json::to_value(&i).unwrap();
        assert_eq!(out["role"], "COORDINATOR");
    }
}
