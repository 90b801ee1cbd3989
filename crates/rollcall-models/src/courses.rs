//! Course records and the creation DTO.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use rollcall_core::serde::deserialize_optional_flexible_datetime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::{Collection, Record};
use crate::ids::{CourseId, TeacherId};
use crate::teachers::TeacherSummary;

/// Three or four uppercase letters followed by three or four digits, e.g. `MATH101`.
pub static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3,4}\d{3,4}$").expect("Invalid course code regex"));

/// A course as returned by the backend, with its teacher embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub course_code: String,
    pub credits: i32,
    pub teacher_id: TeacherId,
    #[serde(default)]
    pub teacher: Option<TeacherSummary>,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Course {
    const COLLECTION: Collection = Collection::Courses;

    fn record_id(&self) -> i64 {
        self.id.get()
    }
}

/// The course fields embedded inside assignments and enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub course_code: Option<String>,
}

/// Payload for `POST /courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 2, message = "Course name must be at least 2 characters"))]
    pub name: String,
    #[validate(regex(
        path = *COURSE_CODE_RE,
        message = "Course code must be 3-4 letters followed by 3-4 numbers"
    ))]
    pub course_code: String,
    #[validate(range(min = 1, max = 5, message = "Credits must be between 1 and 5"))]
    pub credits: i32,
    pub teacher_id: TeacherId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(code: &str) -> CreateCourseDto {
        CreateCourseDto {
            name: "Algebra I".into(),
            course_code: code.into(),
            credits: 4,
            teacher_id: TeacherId::new(1),
        }
    }

    #[test]
    fn test_course_code_pattern() {
        assert!(COURSE_CODE_RE.is_match("MATH101"));
        assert!(COURSE_CODE_RE.is_match("ENG1001"));
        assert!(!COURSE_CODE_RE.is_match("ma101"));
        assert!(!COURSE_CODE_RE.is_match("MATH10000"));
        assert!(!COURSE_CODE_RE.is_match("MA101"));
    }

    #[test]
    fn test_create_course_dto_validation() {
        assert!(dto("MATH101").validate().is_ok());
        assert!(dto("ma101").validate().is_err());
    }

    #[test]
    fn test_create_course_dto_credit_bounds() {
        let low = CreateCourseDto {
            credits: 0,
            ..dto("HIST200")
        };
        let high = CreateCourseDto {
            credits: 6,
            ..dto("HIST200")
        };
        let edge = CreateCourseDto {
            credits: 5,
            ..dto("HIST200")
        };
        assert!(low.validate().is_err());
        assert!(high.validate().is_err());
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_course_with_embedded_teacher() {
        let course: Course = serde_json::from_str(
            r#"{"id":2,"name":"Biology","course_code":"SCIE210","credits":4,"teacher_id":5,
                "teacher":{"id":5,"name":"Grace Hopper","email":"g@example.com","department":"Science"}}"#,
        )
        .unwrap();
        assert_eq!(course.teacher.unwrap().name, "Grace Hopper");
    }
}
