//! Teacher records, departments, and the creation DTO.

use chrono::NaiveDateTime;
use rollcall_core::serde::deserialize_optional_flexible_datetime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::collection::{Collection, Record};
use crate::ids::TeacherId;

/// Departments the backend accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Math,
    Science,
    English,
    History,
    Art,
    Music,
    #[serde(rename = "Physical Education")]
    PhysicalEducation,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Math,
        Department::Science,
        Department::English,
        Department::History,
        Department::Art,
        Department::Music,
        Department::PhysicalEducation,
    ];

    /// Wire and display names, in form order.
    pub const NAMES: [&'static str; 7] = [
        "Math",
        "Science",
        "English",
        "History",
        "Art",
        "Music",
        "Physical Education",
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::English => "English",
            Self::History => "History",
            Self::Art => "Art",
            Self::Music => "Music",
            Self::PhysicalEducation => "Physical Education",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department `{0}`")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

/// A teacher as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub email: String,
    pub department: Department,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Teacher {
    const COLLECTION: Collection = Collection::Teachers;

    fn record_id(&self) -> i64 {
        self.id.get()
    }
}

/// The teacher fields embedded inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherSummary {
    pub id: TeacherId,
    pub name: String,
}

/// Payload for `POST /teachers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub department: Department,
}
