//! Terminal front end for a list view's creation form.

use dialoguer::{Confirm, Input, Select};
use std::collections::BTreeMap;

use crate::client::ResourceApi;
use crate::forms::{FieldKind, FieldSpec, FormSchema, SubmitError};
use crate::views::{self, ListView};

/// Yes/no confirmation on the terminal. Any read failure counts as "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirm;

impl views::Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// What became of an interactive add.
#[derive(Debug)]
pub enum AddOutcome<R> {
    Created(R),
    /// The server refused and the user chose not to retry.
    Abandoned(SubmitError),
}

/// Reads one field until it passes its rules.
fn read_field<S: FormSchema>(view: &mut ListView<S>, spec: &FieldSpec) -> dialoguer::Result<()> {
    loop {
        let value = match spec.kind {
            FieldKind::Choice(_) | FieldKind::Reference(_) => {
                let options = view.options(spec.name);
                if options.is_empty() {
                    read_text(spec, view.form().value(spec.name))?
                } else {
                    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
                    let current = options
                        .iter()
                        .position(|o| o.value == view.form().value(spec.name))
                        .unwrap_or(0);
                    let index = Select::new()
                        .with_prompt(spec.label)
                        .items(&labels)
                        .default(current)
                        .interact()?;
                    options[index].value.clone()
                }
            }
            _ => read_text(spec, view.form().value(spec.name))?,
        };

        let form = view.form_mut();
        form.change(spec.name, value);
        form.blur(spec.name);
        match form.visible_error(spec.name) {
            Some(message) => eprintln!("   ✗ {}", message),
            None => return Ok(()),
        }
    }
}

fn read_text(spec: &FieldSpec, current: &str) -> dialoguer::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(spec.label)
        .allow_empty(!spec.is_required());
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    input.interact_text()
}

/// Prompts for every field, submits, and on failure offers to try again
/// with the entered values kept.
pub async fn add_interactively<S, A>(
    view: &mut ListView<S>,
    api: &A,
) -> anyhow::Result<AddOutcome<S::Record>>
where
    S: FormSchema,
    A: ResourceApi,
{
    println!("{}", S::FORM_TITLE);
    for spec in S::fields() {
        read_field(view, spec)?;
    }

    loop {
        match view.submit(api).await {
            Ok(record) => return Ok(AddOutcome::Created(record)),
            Err(SubmitError::Invalid(errors)) => {
                report_invalid(&errors);
                for spec in S::fields().iter().filter(|s| errors.contains_key(s.name)) {
                    read_field(view, spec)?;
                }
            }
            Err(err) => {
                if let Some(notice) = view.take_notice() {
                    eprintln!("{}", notice);
                }
                let retry = Confirm::new()
                    .with_prompt("Retry with the same values?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(AddOutcome::Abandoned(err));
                }
            }
        }
    }
}

fn report_invalid(errors: &BTreeMap<String, String>) {
    for (field, message) in errors {
        eprintln!("   ✗ {}: {}", field, message);
    }
}
