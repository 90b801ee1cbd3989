//! Assignment records and the creation DTO.

use chrono::NaiveDateTime;
use rollcall_core::serde::{
    deserialize_flexible_datetime, deserialize_optional_flexible_datetime,
    deserialize_optional_text,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::{Collection, Record};
use crate::courses::CourseSummary;
use crate::ids::{AssignmentId, CourseId};

/// An assignment as returned by the backend, with its course embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub due_date: NaiveDateTime,
    pub max_points: i32,
    pub course_id: CourseId,
    #[serde(default)]
    pub course: Option<CourseSummary>,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Assignment {
    const COLLECTION: Collection = Collection::Assignments;

    fn record_id(&self) -> i64 {
        self.id.get()
    }
}

/// Payload for `POST /assignments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateAssignmentDto {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 10000, message = "Description must be less than 10000 characters"))]
    pub description: Option<String>,
    pub due_date: NaiveDateTime,
    #[validate(range(min = 1, max = 1000, message = "Max points must be between 1 and 1000"))]
    pub max_points: i32,
    pub course_id: CourseId,
}
