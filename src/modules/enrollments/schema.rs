use rollcall_models::{Collection, CreateEnrollmentDto, Enrollment, Semester};

use crate::forms::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
use crate::views::Row;

static FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "student_id",
        label: "Student",
        kind: FieldKind::Reference(Collection::Students),
        rules: &[Rule::Required("Student is required")],
    },
    FieldSpec {
        name: "course_id",
        label: "Course",
        kind: FieldKind::Reference(Collection::Courses),
        rules: &[Rule::Required("Course is required")],
    },
    FieldSpec {
        name: "semester",
        label: "Semester",
        kind: FieldKind::Choice(&Semester::NAMES),
        rules: &[
            Rule::Required("Semester is required"),
            Rule::OneOf(
                &Semester::NAMES,
                "Semester must be one of: Fall, Spring, Summer",
            ),
        ],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentSchema;

impl FormSchema for EnrollmentSchema {
    type Payload = CreateEnrollmentDto;
    type Record = Enrollment;

    const HEADING: &'static str = "Enroll Students in Courses";
    const FORM_TITLE: &'static str = "New Enrollment";
    const CREATED_MESSAGE: &'static str = "Student enrolled successfully!";
    const EMPTY_MESSAGE: &'static str = "No enrollments found.";
    const RELATED: &'static [Collection] = &[Collection::Students, Collection::Courses];

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn decode(values: &FormValues) -> Result<CreateEnrollmentDto, FieldError> {
        Ok(CreateEnrollmentDto {
            student_id: values.integer("student_id", "Student")?,
            course_id: values.integer("course_id", "Course")?,
            semester: values.choice("semester", "Semester", &Semester::NAMES)?,
        })
    }

    fn row(enrollment: &Enrollment) -> Row {
        let student = match &enrollment.student {
            Some(s) => s.name.clone(),
            None => format!("Student #{}", enrollment.student_id),
        };
        let course = match &enrollment.course {
            Some(c) => c.name.clone(),
            None => format!("Course #{}", enrollment.course_id),
        };
        let enrolled_on = enrollment
            .enrollment_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Row::new(enrollment.id.get(), format!("{} in {}", student, course)).detail(format!(
            "Semester: {} | Enrollment Date: {}",
            enrollment.semester, enrolled_on
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_models::{CourseId, EnrollmentId, StudentId, StudentSummary};

    #[test]
    fn test_every_field_is_required() {
        assert_eq!(
            EnrollmentSchema::validate_field("student_id", ""),
            Err("Student is required".into())
        );
        assert_eq!(
            EnrollmentSchema::validate_field("course_id", ""),
            Err("Course is required".into())
        );
        assert_eq!(
            EnrollmentSchema::validate_field("semester", ""),
            Err("Semester is required".into())
        );
        assert_eq!(
            EnrollmentSchema::validate_field("semester", "Winter"),
            Err("Semester must be one of: Fall, Spring, Summer".into())
        );
    }

    #[test]
    fn test_decode() {
        let values: FormValues = [("student_id", "4"), ("course_id", "2"), ("semester", "Spring")]
            .into_iter()
            .collect();
        let dto = EnrollmentSchema::decode(&values).unwrap();
        assert_eq!(dto.student_id, StudentId::new(4));
        assert_eq!(dto.course_id, CourseId::new(2));
        assert_eq!(dto.semester, Semester::Spring);
    }

    #[test]
    fn test_row_falls_back_to_ids() {
        let enrollment = Enrollment {
            id: EnrollmentId::new(9),
            student_id: StudentId::new(4),
            course_id: CourseId::new(2),
            semester: Semester::Fall,
            enrollment_date: None,
            student: Some(StudentSummary {
                id: StudentId::new(4),
                name: "Ada Lovelace".into(),
                grade_level: Some(10),
            }),
            course: None,
        };
        let row = EnrollmentSchema::row(&enrollment);
        assert_eq!(row.title, "Ada Lovelace in Course #2");
        assert_eq!(row.details, vec!["Semester: Fall | Enrollment Date: "]);
    }
}
