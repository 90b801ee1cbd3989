use rollcall_core::ClientError;
use rollcall_models::{Collection, Course, Record, Student, Teacher};
use tracing::{debug, info, warn};

use crate::client::ResourceApi;
use crate::forms::{FieldKind, FormController, FormSchema, SubmitError};
use crate::views::{Confirm, Notice, Row, SelectOption};

/// Records fetched only to fill a form's select inputs.
#[derive(Debug, Clone, Default)]
pub struct RelatedCollections {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
}

impl RelatedCollections {
    /// Select options for a reference field pointing at `collection`.
    pub fn options(&self, collection: Collection) -> Vec<SelectOption> {
        match collection {
            Collection::Students => self
                .students
                .iter()
                .map(|s| {
                    let label = format!("{} (Grade {})", s.name, s.grade_level);
                    SelectOption::new(s.id.to_string(), label)
                })
                .collect(),
            Collection::Teachers => self
                .teachers
                .iter()
                .map(|t| {
                    let label = format!("{} - {}", t.name, t.department);
                    SelectOption::new(t.id.to_string(), label)
                })
                .collect(),
            Collection::Courses => self
                .courses
                .iter()
                .map(|c| {
                    let label = format!("{} ({})", c.name, c.course_code);
                    SelectOption::new(c.id.to_string(), label)
                })
                .collect(),
            Collection::Assignments | Collection::Enrollments => Vec::new(),
        }
    }

    async fn load<A>(&mut self, api: &A, collection: Collection) -> Result<(), ClientError>
    where
        A: ResourceApi,
    {
        match collection {
            Collection::Students => self.students = api.list(collection).await?,
            Collection::Teachers => self.teachers = api.list(collection).await?,
            Collection::Courses => self.courses = api.list(collection).await?,
            Collection::Assignments | Collection::Enrollments => {
                debug!(collection = %collection, "Not a select source, skipping");
            }
        }
        Ok(())
    }
}

/// A schema whose records may be deleted from the list.
pub trait Deletable: FormSchema {
    const DELETE_PROMPT: &'static str;
    const DELETE_FAILED: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent.
    Declined,
    Deleted,
    Failed(ClientError),
}

/// One collection's page: its records, the creation form, and the last notice.
#[derive(Debug, Clone)]
pub struct ListView<S: FormSchema> {
    items: Vec<S::Record>,
    related: RelatedCollections,
    form: FormController<S>,
    notice: Option<Notice>,
}

impl<S: FormSchema> Default for ListView<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> ListView<S> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            related: RelatedCollections::default(),
            form: FormController::new(),
            notice: None,
        }
    }

    /// Fetches the collection and every collection its form selects from.
    ///
    /// A failure loading the collection itself sets an error notice and is
    /// returned. A failure loading a related collection only leaves that
    /// select empty.
    pub async fn mount<A>(&mut self, api: &A) -> Result<(), ClientError>
    where
        A: ResourceApi,
    {
        let collection = S::collection();
        match api.list::<S::Record>(collection).await {
            Ok(items) => self.items = items,
            Err(e) => {
                self.notice = Some(Notice::error(format!(
                    "Error loading {}. Please check if the backend server is running.",
                    collection
                )));
                return Err(e);
            }
        }

        for related in S::RELATED {
            if let Err(e) = self.related.load(api, *related).await {
                warn!(collection = %related, error = %e, "Failed to load select options");
            }
        }

        info!(collection = %collection, count = self.items.len(), "View mounted");
        Ok(())
    }

    pub fn items(&self) -> &[S::Record] {
        &self.items
    }

    pub fn related(&self) -> &RelatedCollections {
        &self.related
    }

    pub fn rows(&self) -> Vec<Row> {
        self.items.iter().map(S::row).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn form(&self) -> &FormController<S> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController<S> {
        &mut self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Options for a choice or reference field; empty for any other field.
    pub fn options(&self, field: &str) -> Vec<SelectOption> {
        match S::field(field).map(|spec| spec.kind) {
            Some(FieldKind::Choice(values)) => values
                .iter()
                .map(|v| SelectOption::new(*v, *v))
                .collect(),
            Some(FieldKind::Reference(collection)) => self.related.options(collection),
            _ => Vec::new(),
        }
    }

    /// Submits the form and appends the created record.
    pub async fn submit<A>(&mut self, api: &A) -> Result<S::Record, SubmitError>
    where
        A: ResourceApi,
    {
        match self.form.submit(api).await {
            Ok(record) => {
                let id = record.record_id();
                if !self.items.iter().any(|r| r.record_id() == id) {
                    self.items.push(record.clone());
                }
                self.notice = Some(Notice::success(S::CREATED_MESSAGE));
                Ok(record)
            }
            Err(SubmitError::Api(e)) => {
                self.notice = Some(Notice::error(creation_failure::<S>(&e)));
                Err(SubmitError::Api(e))
            }
            Err(e) => Err(e),
        }
    }
}

impl<S: Deletable> ListView<S> {
    /// Deletes one record after the user confirms.
    ///
    /// Declining sends nothing. Success removes exactly that id; failure
    /// leaves the list as it was.
    pub async fn delete<A, C>(&mut self, api: &A, id: i64, confirm: &C) -> DeleteOutcome
    where
        A: ResourceApi,
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(S::DELETE_PROMPT) {
            debug!(id, "Delete declined");
            return DeleteOutcome::Declined;
        }

        match api.delete(S::collection(), id).await {
            Ok(()) => {
                self.items.retain(|r| r.record_id() != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.notice = Some(Notice::error(S::DELETE_FAILED));
                DeleteOutcome::Failed(e)
            }
        }
    }
}

fn creation_failure<S: FormSchema>(err: &ClientError) -> String {
    match err.server_message() {
        Some(message) => format!("Error: {}", message),
        None => format!(
            "Error creating {}. Please check your connection.",
            S::collection().entity_name().to_lowercase()
        ),
    }
}
