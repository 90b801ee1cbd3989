//! Form schemas and the generic form controller.

pub mod controller;
pub mod schema;

pub use controller::{FormController, FormState, SubmitError};
pub use schema::{FieldError, FieldKind, FieldSpec, FormSchema, FormValues, Rule};
