//! Validation error types.

use super::field::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which rule a field value broke.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Trimmed value is empty
    Required,
    /// Value is present but structurally malformed
    Format,
    /// Value is present but shorter than the minimum length
    TooShort,
}

/// Error attached to a single field.
///
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors keyed by field. A field without an entry has no error.
///
/// Iteration follows field display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    entries: BTreeMap<FieldName, FieldError>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    pub fn kind(&self, field: FieldName) -> Option<ErrorKind> {
        self.get(field).map(|error| error.kind)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.entries.iter().map(|(field, error)| (*field, error))
    }

    /// Fields that currently have an error, in display order.
    ///
    pub fn fields(&self) -> Vec<FieldName> {
        self.entries.keys().copied().collect()
    }

    pub(crate) fn insert(&mut self, field: FieldName, error: FieldError) {
        self.entries.insert(field, error);
    }

    pub(crate) fn remove(&mut self, field: FieldName) -> Option<FieldError> {
        self.entries.remove(&field)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Returned by a submit whose values did not pass validation.
///
/// Always carries at least one field error. The form keeps its values so the
/// caller can show the messages and let the user correct the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {errors}")]
pub struct ValidationFailed {
    pub errors: ErrorState,
}

impl ValidationFailed {
    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }
}
