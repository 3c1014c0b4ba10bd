//! Shared Error Types
//!
//! This module defines the validation errors produced by form validation.
//! They are pure data: handlers render them inline next to the offending
//! field and never turn them into server errors.
//!
//! # Usage
//!
//! ```rust
//! use userboard::shared::error::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("email", "This field is required.");
//! assert!(errors.has_field_errors("email"));
//! ```
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result of running a form schema against submitted data
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// A single failed rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Per-field validation messages
///
/// Messages for one field keep the order in which the rules were declared.
/// Serializes as `{ "field": ["message", ...] }` so templates can look
/// errors up by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Check if there are any validation errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Messages recorded for a field, in rule order
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if a specific field has errors
    pub fn has_field_errors(&self, field: &str) -> bool {
        !self.field_errors(field).is_empty()
    }

    /// Iterate over all errors, field by field
    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.errors.iter().flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| ValidationError::new(field.as_str(), message.as_str()))
        })
    }

    /// `Ok(value)` when empty, `Err(self)` otherwise
    pub fn into_result<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "No validation errors");
        }
        write!(f, "Validation failed for {} field(s):", self.errors.len())?;
        for error in self.iter() {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}
