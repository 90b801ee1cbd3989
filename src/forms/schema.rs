//! Declarative field constraints.
//!
//! Each entity declares its form as a static slice of [`FieldSpec`]s. A spec
//! answers one question, synchronously and without I/O: given the raw text in
//! this field, is it valid, and if not, what should the user read?

use once_cell::sync::Lazy;
use regex::Regex;
use rollcall_core::decode::{DecodeError, parse_datetime, parse_integer};
use rollcall_models::{Collection, Record};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::{Validate, ValidateEmail};

use crate::views::Row;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Number,
    DateTime,
    /// One of a fixed set of values.
    Choice(&'static [&'static str]),
    /// The id of a record in another collection.
    Reference(Collection),
}

/// A single constraint on a field's raw text.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Email(&'static str),
    Pattern(&'static Lazy<Regex>, &'static str),
    /// A whole number within `min..=max`.
    Integer {
        min: i64,
        max: i64,
        too_small: &'static str,
        too_large: &'static str,
    },
    DateTime,
    OneOf(&'static [&'static str], &'static str),
}

impl Rule {
    fn check(&self, label: &str, raw: &str) -> Result<(), String> {
        match *self {
            Rule::Required(_) => Ok(()),
            Rule::MinLength(min, message) => {
                if raw.chars().count() < min {
                    return Err(message.to_string());
                }
                Ok(())
            }
            Rule::MaxLength(max, message) => {
                if raw.chars().count() > max {
                    return Err(message.to_string());
                }
                Ok(())
            }
            Rule::Email(message) => {
                if !raw.trim().validate_email() {
                    return Err(message.to_string());
                }
                Ok(())
            }
            Rule::Pattern(regex, message) => {
                if !regex.is_match(raw) {
                    return Err(message.to_string());
                }
                Ok(())
            }
            Rule::Integer {
                min,
                max,
                too_small,
                too_large,
            } => {
                let value: i64 = parse_integer(raw, label).map_err(|e| e.to_string())?;
                if value < min {
                    return Err(too_small.to_string());
                }
                if value > max {
                    return Err(too_large.to_string());
                }
                Ok(())
            }
            Rule::DateTime => parse_datetime(raw, label)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Rule::OneOf(allowed, message) => {
                if !allowed.contains(&raw) {
                    return Err(message.to_string());
                }
                Ok(())
            }
        }
    }
}

/// One input of an entity's creation form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Payload key, e.g. `grade_level`.
    pub name: &'static str,
    /// Human label, e.g. `Grade Level`.
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.required_message().is_some()
    }

    fn required_message(&self) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Required(message) => Some(*message),
            _ => None,
        })
    }

    /// Runs every rule against `raw`, returning the first failure.
    ///
    /// Blank input fails only the `Required` rule; optional blank fields are
    /// valid.
    pub fn validate(&self, raw: &str) -> Result<(), String> {
        if raw.trim().is_empty() {
            return match self.required_message() {
                Some(message) => Err(message.to_string()),
                None => Ok(()),
            };
        }
        for rule in self.rules {
            rule.check(self.label, raw)?;
        }
        Ok(())
    }
}

/// A field that failed validation or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn decode(field: &str, err: DecodeError) -> Self {
        Self::new(field, err.to_string())
    }
}

/// Raw text of every form input, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of a field; blank if never set.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }

    /// Trimmed text of a required field.
    pub fn text(&self, field: &str) -> String {
        self.get(field).trim().to_string()
    }

    /// Trimmed text, or `None` when blank.
    pub fn optional_text(&self, field: &str) -> Option<String> {
        let value = self.get(field).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Decodes a whole number, including reference ids.
    pub fn integer<T>(&self, field: &str, label: &str) -> Result<T, FieldError>
    where
        T: FromStr,
    {
        parse_integer(self.get(field), label).map_err(|e| FieldError::decode(field, e))
    }

    pub fn datetime(&self, field: &str, label: &str) -> Result<chrono::NaiveDateTime, FieldError> {
        parse_datetime(self.get(field), label).map_err(|e| FieldError::decode(field, e))
    }

    /// Decodes one of a fixed set of values.
    pub fn choice<T>(&self, field: &str, label: &str, allowed: &[&str]) -> Result<T, FieldError>
    where
        T: FromStr,
    {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            return Err(FieldError::decode(field, DecodeError::Missing(label.into())));
        }
        raw.parse::<T>().map_err(|_| {
            FieldError::decode(
                field,
                DecodeError::NotAChoice {
                    label: label.into(),
                    allowed: allowed.join(", "),
                },
            )
        })
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything the generic form controller and list view need to know about
/// one entity.
pub trait FormSchema: 'static {
    /// The typed body POSTed on submit.
    type Payload: Serialize + Validate + Send + Sync;
    /// The record the backend returns.
    type Record: Record;

    /// Heading of the list page, e.g. "Courses".
    const HEADING: &'static str;
    /// Heading of the creation form, e.g. "Add New Course".
    const FORM_TITLE: &'static str;
    /// Notice after a successful create.
    const CREATED_MESSAGE: &'static str;
    /// Shown when the collection is empty.
    const EMPTY_MESSAGE: &'static str;
    /// Collections the form needs for its select options.
    const RELATED: &'static [Collection] = &[];

    fn fields() -> &'static [FieldSpec];

    /// Typed decode of the raw form text into a payload.
    fn decode(values: &FormValues) -> Result<Self::Payload, FieldError>;

    /// How a record is shown in the list.
    fn row(record: &Self::Record) -> Row;

    fn collection() -> Collection {
        <Self::Record as Record>::COLLECTION
    }

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|spec| spec.name == name)
    }

    /// Validates one field's raw value. Unknown fields are always valid.
    fn validate_field(name: &str, raw: &str) -> Result<(), String> {
        match Self::field(name) {
            Some(spec) => spec.validate(raw),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}\d{2}$").unwrap());

    static CODE: FieldSpec = FieldSpec {
        name: "code",
        label: "Code",
        kind: FieldKind::Text,
        rules: &[
            Rule::Required("Code is required"),
            Rule::Pattern(&CODE_RE, "Code must look like AB12"),
        ],
    };

    static COUNT: FieldSpec = FieldSpec {
        name: "count",
        label: "Count",
        kind: FieldKind::Number,
        rules: &[
            Rule::Required("Count is required"),
            Rule::Integer {
                min: 1,
                max: 3,
                too_small: "Count must be at least 1",
                too_large: "Count must be at most 3",
            },
        ],
    };

    static NOTE: FieldSpec = FieldSpec {
        name: "note",
        label: "Note",
        kind: FieldKind::TextArea,
        rules: &[Rule::MaxLength(5, "Note is too long")],
    };

    #[test]
    fn test_required_blank_fails_with_required_message() {
        assert_eq!(CODE.validate("  "), Err("Code is required".to_string()));
        assert!(CODE.is_required());
    }

    #[test]
    fn test_optional_blank_passes() {
        assert!(!NOTE.is_required());
        assert_eq!(NOTE.validate(""), Ok(()));
        assert_eq!(NOTE.validate("123456"), Err("Note is too long".to_string()));
    }

    #[test]
    fn test_pattern_rule() {
        assert!(CODE.validate("AB12").is_ok());
        assert_eq!(
            CODE.validate("ab12"),
            Err("Code must look like AB12".to_string())
        );
    }

    #[test]
    fn test_integer_rule_bounds_and_malformed() {
        assert!(COUNT.validate("1").is_ok());
        assert!(COUNT.validate("3").is_ok());
        assert_eq!(COUNT.validate("0"), Err("Count must be at least 1".into()));
        assert_eq!(COUNT.validate("4"), Err("Count must be at most 3".into()));
        assert_eq!(
            COUNT.validate("two"),
            Err("Count must be a whole number".into())
        );
    }

    #[test]
    fn test_form_values_decoding() {
        let values: FormValues = [("count", " 2 "), ("note", "   "), ("when", "2025-01-02")]
            .into_iter()
            .collect();
        assert_eq!(values.integer::<i32>("count", "Count"), Ok(2));
        assert_eq!(values.optional_text("note"), None);
        assert!(values.datetime("when", "When").is_ok());
        assert_eq!(values.get("missing"), "");

        let err = values.integer::<i32>("missing", "Teacher").unwrap_err();
        assert_eq!(err, FieldError::new("missing", "Teacher is required"));
    }

    #[test]
    fn test_form_values_choice() {
        let values: FormValues = [("semester", "Winter")].into_iter().collect();
        let err = values
            .choice::<rollcall_models::Semester>("semester", "Semester", &["Fall", "Spring"])
            .unwrap_err();
        assert_eq!(err.message, "Semester must be one of: Fall, Spring");
    }
}
