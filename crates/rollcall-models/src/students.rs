//! Student records and the creation DTO.

use chrono::NaiveDateTime;
use rollcall_core::serde::deserialize_optional_flexible_datetime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::{Collection, Record};
use crate::ids::StudentId;

/// A student as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub grade_level: i32,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Student {
    const COLLECTION: Collection = Collection::Students;

    fn record_id(&self) -> i64 {
        self.id.get()
    }
}

/// The student fields the backend embeds inside related records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: StudentId,
    pub name: String,
    #[serde(default)]
    pub grade_level: Option<i32>,
}

/// Payload for `POST /students`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(range(min = 1, max = 12, message = "Grade level must be between 1 and 12"))]
    pub grade_level: i32,
}
