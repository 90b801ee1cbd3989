use rollcall_models::{CreateTeacherDto, Department, Teacher};

use crate::forms::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
use crate::views::Row;

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
        name: "department",
        label: "Department",
        kind: FieldKind::Choice(&Department::NAMES),
        rules: &[
            Rule::Required("Department is required"),
            Rule::OneOf(
                &Department::NAMES,
                "Department must be one of: Math, Science, English, History, Art, Music, Physical Education",
            ),
        ],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherSchema;

impl FormSchema for TeacherSchema {
    type Payload = CreateTeacherDto;
    type Record = Teacher;

    const HEADING: &'static str = "Teachers";
    const FORM_TITLE: &'static str = "Add New Teacher";
    const CREATED_MESSAGE: &'static str = "Teacher added successfully!";
    const EMPTY_MESSAGE: &'static str = "No teachers found. Make sure the backend server is running.";

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn decode(values: &FormValues) -> Result<CreateTeacherDto, FieldError> {
        Ok(CreateTeacherDto {
            name: values.text("name"),
            email: values.text("email"),
            department: values.choice("department", "Department", &Department::NAMES)?,
        })
    }

    fn row(teacher: &Teacher) -> Row {
        Row::new(teacher.id.get(), teacher.name.clone()).detail(format!(
            "Email: {} | Department: {}",
            teacher.email, teacher.department
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_must_be_listed() {
        assert_eq!(
            TeacherSchema::validate_field("department", ""),
            Err("Department is required".into())
        );
        assert!(TeacherSchema::validate_field("department", "Physical Education").is_ok());
        assert!(
            TeacherSchema::validate_field("department", "Cooking")
                .unwrap_err()
                .starts_with("Department must be one of: Math")
        );
    }

    #[test]
    fn test_decode_department_wire_name() {
        let values: FormValues = [
            ("name", "Grace Hopper"),
            ("email", "grace@example.com"),
            ("department", "Physical Education"),
        ]
        .into_iter()
        .collect();

        let dto = TeacherSchema::decode(&values).unwrap();
        assert_eq!(dto.department, Department::PhysicalEducation);
        assert_eq!(
            serde_json::to_value(&dto).unwrap()["department"],
            "Physical Education"
        );
    }
}
