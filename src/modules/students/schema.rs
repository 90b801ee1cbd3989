use rollcall_models::{CreateStudentDto, Student};

use crate::forms::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
use crate::views::{Deletable, Row};

static FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Name is required"),
            Rule::MinLength(2, "Name must be at least 2 characters"),
        ],
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        rules: &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email format"),
        ],
    },
    FieldSpec {
        name: "grade_level",
        label: "Grade Level",
        kind: FieldKind::Number,
        rules: &[
            Rule::Required("Grade level is required"),
            Rule::Integer {
                min: 1,
                max: 12,
                too_small: "Grade must be at least 1",
                too_large: "Grade must be at most 12",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StudentSchema;

impl FormSchema for StudentSchema {
    type Payload = CreateStudentDto;
    type Record = Student;

    const HEADING: &'static str = "Students";
    const FORM_TITLE: &'static str = "Add New Student";
    const CREATED_MESSAGE: &'static str = "Student added successfully!";
    const EMPTY_MESSAGE: &'static str = "No students found. Make sure the backend server is running.";

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn decode(values: &FormValues) -> Result<CreateStudentDto, FieldError> {
        Ok(CreateStudentDto {
            name: values.text("name"),
            email: values.text("email"),
            grade_level: values.integer("grade_level", "Grade Level")?,
        })
    }

    fn row(student: &Student) -> Row {
        Row::new(student.id.get(), student.name.clone()).detail(format!(
            "Email: {} | Grade: {}",
            student.email, student.grade_level
        ))
    }
}

impl Deletable for StudentSchema {
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this student?";
    const DELETE_FAILED: &'static str = "Error deleting student";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_models::StudentId;

    fn check(field: &str, raw: &str) -> Result<(), String> {
        StudentSchema::validate_field(field, raw)
    }

    #[test]
    fn test_required_fields_report_their_own_message() {
        assert_eq!(check("name", ""), Err("Name is required".into()));
        assert_eq!(check("email", " "), Err("Email is required".into()));
        assert_eq!(check("grade_level", ""), Err("Grade level is required".into()));
    }

    #[test]
    fn test_name_min_length() {
        assert_eq!(
            check("name", "A"),
            Err("Name must be at least 2 characters".into())
        );
        assert!(check("name", "Al").is_ok());
    }

    #[test]
    fn test_email_format() {
        assert_eq!(check("email", "not-an-email"), Err("Invalid email format".into()));
        assert!(check("email", "a@b.com").is_ok());
    }

    #[test]
    fn test_grade_bounds() {
        assert!(check("grade_level", "1").is_ok());
        assert!(check("grade_level", "12").is_ok());
        assert_eq!(check("grade_level", "0"), Err("Grade must be at least 1".into()));
        assert_eq!(check("grade_level", "13"), Err("Grade must be at most 12".into()));
        assert_eq!(
            check("grade_level", "9.5"),
            Err("Grade Level must be a whole number".into())
        );
    }

    #[test]
    fn test_decode_parses_grade() {
        let values: FormValues = [
            ("name", " Ada Lovelace "),
            ("email", "ada@example.com"),
            ("grade_level", "10"),
        ]
        .into_iter()
        .collect();

        let dto = StudentSchema::decode(&values).unwrap();
        assert_eq!(dto.name, "Ada Lovelace");
        assert_eq!(dto.grade_level, 10);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["grade_level"], 10);
    }

    #[test]
    fn test_row() {
        let student = Student {
            id: StudentId::new(7),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            grade_level: 10,
            created_at: None,
        };
        let row = StudentSchema::row(&student);
        assert_eq!(row.id, 7);
        assert_eq!(row.details, vec!["Email: ada@example.com | Grade: 10"]);
    }
}
