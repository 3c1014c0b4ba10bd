//! Form Validation
//!
//! A form is described by a static [`FormSchema`]: an ordered list of
//! [`Field`]s, each with the [`Rule`]s it must satisfy. Running a schema
//! against submitted key/value pairs either accepts them, returning
//! normalized [`FormValues`], or returns per-field [`ValidationErrors`].
//!
//! Validation is pure. Nothing here touches the database; forms that fail
//! never reach persistence.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use userboard::shared::validation::{Field, FormSchema, Rule};
//!
//! const SCHEMA: FormSchema = FormSchema::new(&[
//!     Field::text("name", &[Rule::Required]),
//! ]);
//!
//! let mut raw = HashMap::new();
//! raw.insert("name".to_string(), "  Alice ".to_string());
//! let values = SCHEMA.validate(&raw).unwrap();
//! assert_eq!(values.required("name"), "Alice");
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::shared::error::{ValidationErrors, ValidationResult};

/// A single check applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not blank
    Required,
    /// At least this many characters, when a value is given
    MinLength(usize),
    /// At most this many characters, when a value is given
    MaxLength(usize),
    /// Must equal the named field
    EqualTo(&'static str),
}

impl Rule {
    fn check(&self, field: &Field, value: Option<&str>, values: &BTreeMap<&str, String>) -> Option<String> {
        match *self {
            Rule::Required => match value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some("This field is required.".to_string()),
            },
            Rule::MinLength(min) => value
                .filter(|v| !v.is_empty() && v.chars().count() < min)
                .map(|_| format!("Field must be at least {} characters long.", min)),
            Rule::MaxLength(max) => value
                .filter(|v| v.chars().count() > max)
                .map(|_| format!("Field cannot be longer than {} characters.", max)),
            Rule::EqualTo(other) => {
                let other_value = values.get(other).map(String::as_str).unwrap_or("");
                let own = value.unwrap_or("");
                if own == other_value {
                    None
                } else {
                    tracing::debug!("{} does not match {}", field.name, other);
                    Some(format!("Field must be equal to {}.", other))
                }
            }
        }
    }
}

/// A named form field and its rules
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Name of the submitted key
    pub name: &'static str,
    /// Rules in the order they are reported
    pub rules: &'static [Rule],
    /// Secret fields (passwords) are not trimmed and never echoed back
    pub secret: bool,
}

impl Field {
    /// A plain text field, trimmed before validation
    pub const fn text(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            rules,
            secret: false,
        }
    }

    /// A secret field, validated verbatim
    pub const fn secret(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            rules,
            secret: true,
        }
    }

    fn normalize(&self, raw: &str) -> String {
        if self.secret {
            raw.to_string()
        } else {
            raw.trim().to_string()
        }
    }
}

/// An ordered set of fields making up one form
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    fields: &'static [Field],
}

impl FormSchema {
    /// Declare a schema
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Declared fields, in order
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Run every rule of every field against the submitted data
    ///
    /// Keys not declared in the schema are ignored. All failures are
    /// collected; validation does not stop at the first bad field.
    pub fn validate(&self, raw: &HashMap<String, String>) -> ValidationResult<FormValues> {
        let values: BTreeMap<&'static str, String> = self
            .fields
            .iter()
            .filter_map(|field| raw.get(field.name).map(|v| (field.name, field.normalize(v))))
            .collect();

        let mut errors = ValidationErrors::new();
        for field in self.fields {
            let value = values.get(field.name).map(String::as_str);
            for rule in field.rules {
                if let Some(message) = rule.check(field, value, &values) {
                    errors.add(field.name, message);
                }
            }
        }

        errors.into_result(FormValues { values })
    }

    /// Submitted non-secret values, for re-rendering a rejected form
    pub fn echo(&self, raw: &HashMap<String, String>) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .filter(|field| !field.secret)
            .filter_map(|field| raw.get(field.name).map(|v| (field.name, field.normalize(v))))
            .collect()
    }
}

/// Normalized values of an accepted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<&'static str, String>,
}

impl FormValues {
    /// Value of a field declared `Required`
    ///
    /// Returns an empty string if the field is absent, which validation
    /// rules out for required fields.
    pub fn required(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    /// Value of an optional field; blank counts as absent
    pub fn optional(&self, field: &str) -> Option<String> {
        self.values.get(field).filter(|v| !v.is_empty()).cloned()
    }

    /// Whether the field was part of the submission at all
    pub fn submitted(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

/// A typed form built from an accepted [`FormSchema`]
pub trait Form: Sized {
    /// Fields and rules of this form
    const SCHEMA: FormSchema;

    /// Build the typed form from validated values
    fn from_values(values: FormValues) -> Self;

    /// Validate submitted data and build the form
    fn validate(raw: &HashMap<String, String>) -> ValidationResult<Self> {
        Self::SCHEMA.validate(raw).map(Self::from_values)
    }
}
