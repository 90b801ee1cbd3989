//! Fills a backend with fake but valid records through the regular
//! resource client.

use chrono::{TimeDelta, Utc};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use rollcall_core::ClientError;
use rollcall_models::{
    Assignment, Collection, Course, CreateAssignmentDto, CreateCourseDto, CreateEnrollmentDto,
    CreateStudentDto, CreateTeacherDto, Department, Enrollment, Semester, Student, Teacher,
};
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::client::ResourceApi;

/// Course catalogue: name, code prefix, credits. Prefixes are distinct so
/// codes never collide across rows.
const COURSES: [(&str, &str, i32); 8] = [
    ("Algebra I", "MATH", 4),
    ("Biology", "SCIE", 4),
    ("English Literature", "ENGL", 3),
    ("World History", "HIST", 3),
    ("Art Fundamentals", "ARTS", 2),
    ("Physical Education", "PHED", 1),
    ("Chemistry", "CHEM", 4),
    ("Calculus", "CALC", 4),
];

const ASSIGNMENTS_PER_COURSE: usize = 3;
const MAX_POINTS: [i32; 4] = [100, 50, 75, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub students: usize,
    pub teachers: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            students: 10,
            teachers: 8,
        }
    }
}

/// How many records of each kind were created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub teachers: usize,
    pub courses: usize,
    pub assignments: usize,
    pub enrollments: usize,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} teachers, {} students, {} courses, {} enrollments, {} assignments",
            self.teachers, self.students, self.courses, self.enrollments, self.assignments
        )
    }
}

fn pick<T>(items: &[T]) -> &T {
    &items[(0..items.len()).fake::<usize>()]
}

/// Creates teachers, students, courses, enrollments, and assignments in
/// dependency order. Stops at the first failed request.
///
/// Emails and course codes already on the backend are listed first and
/// avoided, so seeding a populated backend adds to it.
#[instrument(skip(api))]
pub async fn seed<A>(api: &A, counts: SeedCounts) -> Result<SeedSummary, ClientError>
where
    A: ResourceApi,
{
    let start_time = Instant::now();
    let mut summary = SeedSummary::default();

    println!("🌱 Seeding backend...");

    let existing: Vec<Teacher> = api.list(Collection::Teachers).await?;
    let mut taken: HashSet<String> = existing.into_iter().map(|t| t.email).collect();
    let mut teachers: Vec<Teacher> = Vec::with_capacity(counts.teachers);
    for i in 0..counts.teachers {
        let dto = CreateTeacherDto {
            name: Name().fake(),
            email: fresh_email(&mut taken, i, &SafeEmail().fake::<String>()),
            department: *pick(&Department::ALL),
        };
        teachers.push(api.create(Collection::Teachers, &dto).await?);
    }
    summary.teachers = teachers.len();
    println!("   ✓ {} teachers", summary.teachers);

    let existing: Vec<Student> = api.list(Collection::Students).await?;
    let mut taken: HashSet<String> = existing.into_iter().map(|s| s.email).collect();
    let mut students: Vec<Student> = Vec::with_capacity(counts.students);
    for i in 0..counts.students {
        let dto = CreateStudentDto {
            name: Name().fake(),
            email: fresh_email(&mut taken, i, &SafeEmail().fake::<String>()),
            grade_level: (9..=12).fake::<i32>(),
        };
        students.push(api.create(Collection::Students, &dto).await?);
    }
    summary.students = students.len();
    println!("   ✓ {} students", summary.students);

    if teachers.is_empty() {
        info!("No teachers created, skipping courses");
        return Ok(summary);
    }

    let existing: Vec<Course> = api.list(Collection::Courses).await?;
    let mut taken: HashSet<String> = existing.into_iter().map(|c| c.course_code).collect();
    let mut courses: Vec<Course> = Vec::with_capacity(COURSES.len());
    for (i, (name, prefix, credits)) in COURSES.iter().enumerate() {
        let Some(course_code) = fresh_code(&mut taken, prefix) else {
            warn!(prefix, "Every course code for this prefix is taken, skipping");
            continue;
        };
        let dto = CreateCourseDto {
            name: (*name).to_string(),
            course_code,
            credits: *credits,
            teacher_id: teachers[i % teachers.len()].id,
        };
        courses.push(api.create(Collection::Courses, &dto).await?);
    }
    summary.courses = courses.len();
    println!("   ✓ {} courses", summary.courses);

    if courses.is_empty() {
        return Ok(summary);
    }

    for student in &students {
        let mut enrolled = HashSet::new();
        for _ in 0..(4..=6).fake::<usize>() {
            let course = pick(&courses);
            if !enrolled.insert(course.id) {
                continue;
            }
            let dto = CreateEnrollmentDto {
                student_id: student.id,
                course_id: course.id,
                semester: *pick(&Semester::ALL),
            };
            let _: Enrollment = api.create(Collection::Enrollments, &dto).await?;
            summary.enrollments += 1;
        }
    }
    println!("   ✓ {} enrollments", summary.enrollments);

    for course in &courses {
        for n in 1..=ASSIGNMENTS_PER_COURSE {
            let days = (7..=30).fake::<i64>();
            let dto = CreateAssignmentDto {
                title: format!("{} Assignment {}", course.name, n),
                description: Some(Paragraph(2..4).fake()),
                due_date: Utc::now().naive_utc() + TimeDelta::days(days),
                max_points: *pick(&MAX_POINTS),
                course_id: course.id,
            };
            let _: Assignment = api.create(Collection::Assignments, &dto).await?;
            summary.assignments += 1;
        }
    }
    println!("   ✓ {} assignments", summary.assignments);

    info!(elapsed = ?start_time.elapsed(), ?summary, "Seeding complete");
    Ok(summary)
}

/// Prefixes `email` with the row index, adding a counter until it is unused.
fn fresh_email(taken: &mut HashSet<String>, index: usize, email: &str) -> String {
    let mut candidate = format!("{}.{}", index, email);
    let mut attempt = 1;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}.{}.{}", index, attempt, email);
        attempt += 1;
    }
    candidate
}

/// First unused code for `prefix`, scanning every valid number from a
/// random start.
fn fresh_code(taken: &mut HashSet<String>, prefix: &str) -> Option<String> {
    let start = (100..500).fake::<u32>();
    (start..10_000)
        .chain(100..start)
        .map(|n| format!("{}{}", prefix, n))
        .find(|code| taken.insert(code.clone()))
}
