//! Generic form controller.
//!
//! One controller type serves every entity: the schema supplies the fields,
//! the decode step, and the payload type. The controller owns field values,
//! touched flags, per-field errors, and the submission lifecycle:
//!
//! ```text
//! Pristine --change--> Editing --submit(valid)--> Submitting
//!    ^                   ^  |                         |
//!    |                   |  +--submit(invalid)--+     |
//!    |                   +----------------------+     |
//!    |                   +------- failure ------------+
//!    +------------------------- success --------------+
//! ```

use rollcall_core::ClientError;
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use tracing::{debug, warn};
use validator::{Validate, ValidationErrors};

use crate::client::ResourceApi;
use crate::forms::schema::{FieldError, FormSchema, FormValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No field touched or changed since creation or the last successful submit.
    Pristine,
    Editing,
    /// A create request is in flight; further submits are refused.
    Submitting,
}

/// Why a submit did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Validation failed; no request was sent. Errors are per field.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(BTreeMap<String, String>),

    /// A previous submit is still in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// The request was sent and failed.
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Form state for one entity's creation form.
#[derive(Debug, Clone)]
pub struct FormController<S: FormSchema> {
    values: FormValues,
    touched: BTreeSet<String>,
    errors: BTreeMap<String, String>,
    state: FormState,
    _schema: PhantomData<S>,
}

impl<S: FormSchema> Default for FormController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> FormController<S> {
    pub fn new() -> Self {
        Self {
            values: FormValues::new(),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            state: FormState::Pristine,
            _schema: PhantomData,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field)
    }

    /// The current error for a field, whether or not it is shown yet.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The error to display: only once the field has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records new input and re-runs that field's rule.
    pub fn change(&mut self, field: &str, value: impl Into<String>) {
        let Some(spec) = S::field(field) else {
            warn!(field, form = S::FORM_TITLE, "Ignoring change to unknown field");
            return;
        };
        let value = value.into();
        match spec.validate(&value) {
            Ok(()) => {
                self.errors.remove(spec.name);
            }
            Err(message) => {
                self.errors.insert(spec.name.to_string(), message);
            }
        }
        self.values.set(spec.name, value);
        if self.state == FormState::Pristine {
            self.state = FormState::Editing;
        }
    }

    /// Marks a field as touched and validates its current value.
    pub fn blur(&mut self, field: &str) {
        let Some(spec) = S::field(field) else {
            return;
        };
        self.touched.insert(spec.name.to_string());
        self.revalidate(spec.name);
        if self.state == FormState::Pristine {
            self.state = FormState::Editing;
        }
    }

    fn revalidate(&mut self, field: &'static str) {
        match S::validate_field(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(message) => {
                self.errors.insert(field.to_string(), message);
            }
        }
    }

    /// Validates every field and, if all pass, enters `Submitting` and
    /// returns the typed payload to send.
    ///
    /// On failure every field is marked touched so all errors become visible,
    /// and the form stays in `Editing`.
    pub fn begin_submit(&mut self) -> Result<S::Payload, SubmitError> {
        if self.state == FormState::Submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        for spec in S::fields() {
            self.touched.insert(spec.name.to_string());
            self.revalidate(spec.name);
        }
        self.state = FormState::Editing;
        if !self.errors.is_empty() {
            debug!(form = S::FORM_TITLE, errors = self.errors.len(), "Submit blocked by validation");
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let payload = S::decode(&self.values).map_err(|FieldError { field, message }| {
            self.errors.insert(field, message);
            SubmitError::Invalid(self.errors.clone())
        })?;

        if let Err(errors) = payload.validate() {
            self.absorb_validation_errors(&errors);
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.state = FormState::Submitting;
        Ok(payload)
    }

    fn absorb_validation_errors(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            self.errors.insert(field.to_string(), message);
        }
    }

    /// Applies the outcome of the request started by [`begin_submit`].
    ///
    /// Success resets the form to `Pristine`; failure returns to `Editing`
    /// with every value kept.
    ///
    /// [`begin_submit`]: FormController::begin_submit
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.reset();
        } else {
            self.state = FormState::Editing;
        }
    }

    /// Validates, sends, and applies the outcome in one step.
    ///
    /// If the returned future is dropped before the request completes, the
    /// form goes back to `Editing` with its values kept.
    pub async fn submit<A>(&mut self, api: &A) -> Result<S::Record, SubmitError>
    where
        A: ResourceApi,
    {
        let payload = self.begin_submit()?;
        let result = {
            let _in_flight = InFlight(&mut self.state);
            api.create::<S::Payload, S::Record>(S::collection(), &payload)
                .await
        };
        self.finish_submit(result.is_ok());
        result.map_err(SubmitError::from)
    }

    /// Clears values, touched flags, and errors.
    pub fn reset(&mut self) {
        self.values.clear();
        self.touched.clear();
        self.errors.clear();
        self.state = FormState::Pristine;
    }
}

/// Releases the `Submitting` lock when a submit is abandoned mid-request.
struct InFlight<'a>(&'a mut FormState);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.0 == FormState::Submitting {
            *self.0 = FormState::Editing;
        }
    }
}
