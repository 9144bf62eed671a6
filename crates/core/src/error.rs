//! Error taxonomy for the console core
//!
//! Only two things can go wrong without I/O:
//! - Validation: a form or patch carries a missing or malformed field
//! - NotFound: an update or delete names a key the store does not hold
//!
//! Both are recovered at the screen that triggered them.

use crate::key::{RecordKey, RecordKind};
use std::fmt;
use thiserror::Error;

/// Result alias used throughout the console crates
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors raised by stores, tables and edit sessions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// One or more fields failed validation
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// No record with this key exists in the store
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// Kind of record that was looked up
        kind: RecordKind,
        /// The missing key
        key: RecordKey,
    },
}

impl ConsoleError {
    /// Shorthand for a validation error on a single field
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConsoleError::Validation(ValidationErrors::single(field, message))
    }

    /// Shorthand for a not-found error
    pub fn not_found(kind: RecordKind, key: &RecordKey) -> Self {
        ConsoleError::NotFound {
            kind,
            key: key.clone(),
        }
    }

    /// True if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConsoleError::NotFound { .. })
    }

    /// Field errors, if this is a validation error
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ConsoleError::Validation(errors) => Some(errors),
            ConsoleError::NotFound { .. } => None,
        }
    }
}

impl From<ValidationErrors> for ConsoleError {
    fn from(errors: ValidationErrors) -> Self {
        ConsoleError::Validation(errors)
    }
}

/// A message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name (camelCase, as in the form)
    pub field: String,
    /// Message shown next to the field
    pub message: String,
}

/// All field errors produced by one validation pass, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding a single error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Append an error
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// True if no errors were recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over all errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when empty, otherwise the errors as a `ConsoleError`
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConsoleError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
