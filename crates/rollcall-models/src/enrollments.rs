//! Enrollment records, semesters, and the creation DTO.

use chrono::NaiveDateTime;
use rollcall_core::serde::deserialize_optional_flexible_datetime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::collection::{Collection, Record};
use crate::courses::CourseSummary;
use crate::ids::{CourseId, EnrollmentId, StudentId};
use crate::students::StudentSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Spring,
    Summer,
}

impl Semester {
    pub const ALL: [Semester; 3] = [Semester::Fall, Semester::Spring, Semester::Summer];
    pub const NAMES: [&'static str; 3] = ["Fall", "Spring", "Summer"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown semester `{0}`")]
pub struct UnknownSemester(pub String);

impl FromStr for Semester {
    type Err = UnknownSemester;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sem| sem.as_str() == s)
            .ok_or_else(|| UnknownSemester(s.to_string()))
    }
}

/// An enrollment as returned by the backend, with student and course embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub semester: Semester,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_datetime")]
    pub enrollment_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub student: Option<StudentSummary>,
    #[serde(default)]
    pub course: Option<CourseSummary>,
}

impl Record for Enrollment {
    const COLLECTION: Collection = Collection::Enrollments;

    fn record_id(&self) -> i64 {
        self.id.get()
    }
}

/// Payload for `POST /enrollments`.
///
/// Every field is typed, so there is nothing left for the validator to reject;
/// the derive keeps the payload usable wherever a `Validate` bound is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateEnrollmentDto {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub semester: Semester,
}
