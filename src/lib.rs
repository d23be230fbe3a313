//! Contact form validation engine.
//!
//! The [`form`] module holds the engine itself. The remaining modules carry
//! the configuration, logging and error plumbing used by the `contact-form`
//! command-line front end.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod utils;

pub use form::{
    ErrorKind, ErrorState, FieldError, FieldName, FormState, FormValidationEngine, RuleSettings,
    Snapshot, ValidationFailed,
};
