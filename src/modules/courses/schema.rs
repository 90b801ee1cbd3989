use rollcall_models::{COURSE_CODE_RE, Collection, Course, CreateCourseDto};

use crate::forms::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
use crate::views::Row;

static FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "name",
        label: "Course Name",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Course name is required"),
            Rule::MinLength(2, "Course name must be at least 2 characters"),
        ],
    },
    FieldSpec {
        name: "course_code",
        label: "Course Code",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Course code is required"),
            Rule::Pattern(
                &COURSE_CODE_RE,
                "Course code must be 3-4 letters followed by 3-4 numbers",
            ),
        ],
    },
    FieldSpec {
        name: "credits",
        label: "Credits",
        kind: FieldKind::Number,
        rules: &[
            Rule::Required("Credits are required"),
            Rule::Integer {
                min: 1,
                max: 5,
                too_small: "Credits must be at least 1",
                too_large: "Credits must be at most 5",
            },
        ],
    },
    FieldSpec {
        name: "teacher_id",
        label: "Teacher",
        kind: FieldKind::Reference(Collection::Teachers),
        rules: &[Rule::Required("Teacher is required")],
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CourseSchema;

impl FormSchema for CourseSchema {
    type Payload = CreateCourseDto;
    type Record = Course;

    const HEADING: &'static str = "Courses";
    const FORM_TITLE: &'static str = "Add New Course";
    const CREATED_MESSAGE: &'static str = "Course added successfully!";
    const EMPTY_MESSAGE: &'static str = "No courses found. Make sure the backend server is running.";
    const RELATED: &'static [Collection] = &[Collection::Teachers];

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn decode(values: &FormValues) -> Result<CreateCourseDto, FieldError> {
        Ok(CreateCourseDto {
            name: values.text("name"),
            course_code: values.text("course_code"),
            credits: values.integer("credits", "Credits")?,
            teacher_id: values.integer("teacher_id", "Teacher")?,
        })
    }

    fn row(course: &Course) -> Row {
        let teacher = course.teacher.as_ref().map(|t| t.name.as_str()).unwrap_or("");
        Row::new(
            course.id.get(),
            format!("{} ({})", course.name, course.course_code),
        )
        .detail(format!("Credits: {} | Teacher: {}", course.credits, teacher))
    }
}
