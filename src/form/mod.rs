//! Contact form domain layer.
//!
//! This module contains the form validation engine and the types it works
//! with:
//! - `FieldName`, `FormState` and `Snapshot` for field values
//! - `ErrorState`, `FieldError` and `ValidationFailed` for validation results
//! - `RuleSettings` and the per-field rules

mod engine;
mod error;
mod field;
pub mod rules;

pub use engine::FormValidationEngine;
pub use error::{ErrorKind, ErrorState, FieldError, ValidationFailed};
pub use field::{FieldName, FormState, Snapshot};
pub use rules::RuleSettings;
