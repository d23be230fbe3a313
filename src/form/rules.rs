//! Per-field validation rules.
//!
//! Every rule is a pure function of the field value and the `RuleSettings`
//! the engine was built with. A rule returns `None` when the value is
//! acceptable and the first broken rule otherwise.

use super::error::{ErrorKind, FieldError};
use super::field::FieldName;
use crate::utils::text_processing::{char_count, strip_non_digits};
use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Unanchored `local@domain.tld` shape: something, `@`, something, `.`, something.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// Thresholds used by the rules. Fixed for the lifetime of an engine.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Minimum message length in characters
    pub message_min_length: usize,
    /// Input cap for the message field; never a validation failure
    pub message_max_length: usize,
    /// Minimum digits left in a phone number once formatting is stripped
    pub phone_min_digits: usize,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            message_min_length: 10,
            message_max_length: 500,
            phone_min_digits: 10,
        }
    }
}

impl RuleSettings {
    /// Maximum number of characters the input layer accepts for `field`.
    ///
    pub fn max_input_length(&self, field: FieldName) -> Option<usize> {
        match field {
            FieldName::Message => Some(self.message_max_length),
            _ => None,
        }
    }
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Failed to compile email pattern '{}': {}", EMAIL_PATTERN, e);
                None
            }
        })
        .as_ref()
}

/// Blank means only whitespace or byte order marks, which also covers the
/// U+FEFF that `str::trim` keeps.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn required(value: &str, message: &str) -> Option<FieldError> {
    if is_blank(value) {
        Some(FieldError::new(ErrorKind::Required, message))
    } else {
        None
    }
}

fn email_format(value: &str) -> Option<FieldError> {
    let valid = email_regex().map_or(false, |re| re.is_match(value));
    if valid {
        None
    } else {
        Some(FieldError::new(
            ErrorKind::Format,
            "Please enter a valid email address",
        ))
    }
}

fn phone_format(value: &str, settings: &RuleSettings) -> Option<FieldError> {
    if strip_non_digits(value).len() >= settings.phone_min_digits {
        None
    } else {
        Some(FieldError::new(
            ErrorKind::Format,
            format!(
                "Please enter a valid phone number (at least {} digits)",
                settings.phone_min_digits
            ),
        ))
    }
}

fn message_length(value: &str, settings: &RuleSettings) -> Option<FieldError> {
    if char_count(value) >= settings.message_min_length {
        None
    } else {
        Some(FieldError::new(
            ErrorKind::TooShort,
            format!(
                "Message must be at least {} characters",
                settings.message_min_length
            ),
        ))
    }
}

/// Run the rule for `field` against `value`.
///
/// Format and length checks only run once the required check passes, so a
/// field reports at most one error.
pub fn check(field: FieldName, value: &str, settings: &RuleSettings) -> Option<FieldError> {
    match field {
        FieldName::Name => required(value, "Name is required"),
        FieldName::Email => required(value, "Email is required").or_else(|| email_format(value)),
        FieldName::Phone => {
            required(value, "Phone is required").or_else(|| phone_format(value, settings))
        }
        FieldName::Subject => required(value, "Subject is required"),
        FieldName::Message => {
            required(value, "Message is required").or_else(|| message_length(value, settings))
        }
    }
}
