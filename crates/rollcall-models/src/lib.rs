//! # Rollcall Models
//!
//! Record types and creation DTOs for the school records backend.
//!
//! Records (`Student`, `Course`, ...) decode leniently: unknown server fields
//! are ignored and timestamps accept every format the backend emits. DTOs
//! (`CreateStudentDto`, ...) are what the client POSTs; each derives
//! [`validator::Validate`] with the same bounds the backend enforces.
//!
//! # Modules
//!
//! - [`collection`]: Collection names and the [`Record`] trait
//! - [`ids`]: Strongly-typed integer IDs
//! - [`students`], [`teachers`], [`courses`], [`assignments`], [`enrollments`]
//!
//! # Example
//!
//! ```ignore
//! use rollcall_models::{Collection, CreateCourseDto, TeacherId};
//! use validator::Validate;
//!
//! let dto = CreateCourseDto {
//!     name: "Algebra I".into(),
//!     course_code: "MATH101".into(),
//!     credits: 4,
//!     teacher_id: TeacherId::new(1),
//! };
//! dto.validate()?;
//! assert_eq!(Collection::Courses.path(), "/courses");
//! ```

pub mod assignments;
pub mod collection;
pub mod courses;
pub mod enrollments;
pub mod ids;
pub mod students;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use collection::{Collection, Record, UnknownCollection};
pub use ids::{AssignmentId, CourseId, EnrollmentId, StudentId, TeacherId};

pub use assignments::{Assignment, CreateAssignmentDto};
pub use courses::{COURSE_CODE_RE, Course, CourseSummary, CreateCourseDto};
pub use enrollments::{CreateEnrollmentDto, Enrollment, Semester};
pub use students::{CreateStudentDto, Student, StudentSummary};
pub use teachers::{CreateTeacherDto, Department, Teacher, TeacherSummary};
