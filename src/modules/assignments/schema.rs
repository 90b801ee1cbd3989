use rollcall_models::{Assignment, Collection, CreateAssignmentDto};

use crate::forms::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
use crate::views::Row;

static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "title",
        label: "Title",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Title is required"),
            Rule::MinLength(2, "Title must be at least 2 characters"),
        ],
    },
    FieldSpec {
        name: "description",
        label: "Description",
        kind: FieldKind::TextArea,
        rules: &[Rule::MaxLength(
            10000,
            "Description must be less than 10000 characters",
        )],
    },
    FieldSpec {
        name: "due_date",
        label: "Due date",
        kind: FieldKind::DateTime,
        rules: &[Rule::Required("Due date is required"), Rule::DateTime],
    },
    FieldSpec {
        name: "max_points",
        label: "Max points",
        kind: FieldKind::Number,
        rules: &[
            Rule::Required("Max points are required"),
            Rule::Integer {
                min: 1,
                max: 1000,
                too_small: "Max points must be at least 1",
                too_large: "Max points must be at most 1000",
            },
        ],
    },
    FieldSpec {
        name: "course_id",
        label: "Course",
        kind: FieldKind::Reference(Collection::Courses),
        rules: &[Rule::Required("Course is required")],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentSchema;

impl FormSchema for AssignmentSchema {
    type Payload = CreateAssignmentDto;
    type Record = Assignment;

    const HEADING: &'static str = "Assignments";
    const FORM_TITLE: &'static str = "Create New Assignment";
    const CREATED_MESSAGE: &'static str = "Assignment added successfully!";
    const EMPTY_MESSAGE: &'static str =
        "No assignments found. Make sure the backend server is running.";
    const RELATED: &'static [Collection] = &[Collection::Courses];

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn decode(values: &FormValues) -> Result<CreateAssignmentDto, FieldError> {
        Ok(CreateAssignmentDto {
            title: values.text("title"),
            description: values.optional_text("description"),
            due_date: values.datetime("due_date", "Due date")?,
            max_points: values.integer("max_points", "Max points")?,
            course_id: values.integer("course_id", "Course")?,
        })
    }

    fn row(assignment: &Assignment) -> Row {
        let course = assignment
            .course
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("");
        let row = Row::new(assignment.id.get(), assignment.title.clone()).detail(format!(
            "Course: {} | Due: {} | Max Points: {}",
            course,
            assignment.due_date.format("%Y-%m-%d %H:%M"),
            assignment.max_points
        ));
        match &assignment.description {
            Some(description) => row.detail(description.clone()),
            None => row,
        }
    }
}
