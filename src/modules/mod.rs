pub mod assignments;
pub mod courses;
pub mod enrollments;
pub mod students;
pub mod teachers;

pub use self::assignments::AssignmentSchema;
pub use self::courses::CourseSchema;
pub use self::enrollments::EnrollmentSchema;
pub use self::students::StudentSchema;
pub use self::teachers::TeacherSchema;
