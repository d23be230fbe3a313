//! The contact form validation engine.

use super::error::{ErrorState, FieldError, ValidationFailed};
use super::field::{FieldName, FormState, Snapshot};
use super::rules::{self, RuleSettings};
use crate::utils::text_processing::{char_count, truncate_chars};
use log::*;

/// Owns the values and errors of one form session.
///
/// Values change through `set_field` (or `input`, which also applies the
/// input cap). Errors are only computed by `validate` and `submit`; editing a
/// field clears that field's error right away without re-validating.
#[derive(Debug, Clone, Default)]
pub struct FormValidationEngine {
    values: FormState,
    errors: ErrorState,
    rules: RuleSettings,
}

impl FormValidationEngine {
    /// Return a new engine with empty values and the default rules.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new engine with empty values and the given rule thresholds.
    ///
    pub fn with_rules(rules: RuleSettings) -> Self {
        Self {
            values: FormState::new(),
            errors: ErrorState::new(),
            rules,
        }
    }

    pub fn rules(&self) -> &RuleSettings {
        &self.rules
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Store `value` for `field` and drop any error currently shown for it.
    ///
    /// The new value is not validated here.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value.into());
        if self.errors.remove(field).is_some() {
            debug!("Cleared error on {} after edit", field);
        }
    }

    /// Store user input for `field`, truncated to the field's input cap.
    ///
    pub fn input(&mut self, field: FieldName, value: &str) {
        match self.rules.max_input_length(field) {
            Some(max) if char_count(value) > max => {
                debug!("Truncating {} input to {} characters", field, max);
                self.set_field(field, truncate_chars(value, max));
            }
            _ => self.set_field(field, value),
        }
    }

    pub fn char_count(&self, field: FieldName) -> usize {
        char_count(self.value(field))
    }

    /// Character counter for display, e.g. `"42/500"` for a capped field.
    ///
    /// Fields without an input cap show only the count.
    pub fn char_count_label(&self, field: FieldName) -> String {
        match self.rules.max_input_length(field) {
            Some(max) => format!("{}/{}", self.char_count(field), max),
            None => self.char_count(field).to_string(),
        }
    }

    /// Compute the errors for the current values without storing them.
    ///
    fn check_all(&self) -> ErrorState {
        let mut errors = ErrorState::new();
        for (field, value) in self.values.iter() {
            if let Some(error) = rules::check(field, value, &self.rules) {
                errors.insert(field, error);
            }
        }
        errors
    }

    /// Validate every field, replace the stored errors with the result and
    /// return it. Only failing fields appear in the returned state.
    ///
    pub fn validate(&mut self) -> ErrorState {
        let errors = self.check_all();
        debug!("Validation found {} field error(s)", errors.len());
        self.errors = errors.clone();
        errors
    }

    /// Whether the current values would pass validation. Stored errors are
    /// left alone.
    ///
    pub fn is_valid(&self) -> bool {
        self.check_all().is_empty()
    }

    /// Validate and, when everything passes, hand out a snapshot of the values
    /// and reset the form. On failure the values are kept and the errors are
    /// stored and returned.
    ///
    pub fn submit(&mut self) -> Result<Snapshot, ValidationFailed> {
        let errors = self.validate();
        if !errors.is_empty() {
            warn!("Submit rejected, invalid fields: {:?}", errors.fields());
            return Err(ValidationFailed { errors });
        }

        let snapshot = Snapshot::new(std::mem::take(&mut self.values));
        self.errors.clear();
        info!("Contact form submitted: {}", snapshot.to_json());
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ErrorKind;
    use fake::faker::lorem::en::Sentence;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn fill(engine: &mut FormValidationEngine, values: [&str; FieldName::COUNT]) {
        for (field, value) in FieldName::ALL.iter().zip(values) {
            engine.set_field(*field, value);
        }
    }

    fn valid_engine() -> FormValidationEngine {
        let mut engine = FormValidationEngine::new();
        fill(
            &mut engine,
            [
                "Jane Doe",
                "jane@example.com",
                "5551234567",
                "Hi",
                "This is a long enough message.",
            ],
        );
        engine
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = FormValidationEngine::new();
        assert!(engine.values().is_empty());
        assert!(engine.errors().is_empty());
        assert_eq!(engine.rules(), &RuleSettings::default());
    }

    #[test]
    fn test_empty_fields_all_required() {
        let mut engine = FormValidationEngine::new();
        for field in FieldName::ALL {
            engine.set_field(field, "");
        }
        let errors = engine.validate();
        assert_eq!(errors.len(), FieldName::COUNT);
        for field in FieldName::ALL {
            assert_eq!(errors.kind(field), Some(ErrorKind::Required));
        }
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut engine = FormValidationEngine::new();
        fill(&mut engine, ["", "bad", "123", "Subject", "short"]);
        let first = engine.validate();
        let second = engine.validate();
        assert_eq!(first, second);
        assert_eq!(engine.errors(), &second);
    }

    #[test]
    fn test_validate_replaces_previous_errors() {
        let mut engine = FormValidationEngine::new();
        engine.validate();
        assert_eq!(engine.errors().len(), FieldName::COUNT);

        // Write values directly so stale errors would survive a patch-style update
        engine.values.set(FieldName::Name, "Jane".to_string());
        let errors = engine.validate();
        assert!(!errors.contains(FieldName::Name));
        assert!(!engine.errors().contains(FieldName::Name));
        assert_eq!(engine.errors().len(), FieldName::COUNT - 1);
    }

    #[test]
    fn test_set_field_clears_error_without_revalidating() {
        let mut engine = FormValidationEngine::new();
        engine.set_field(FieldName::Email, "bad");
        engine.validate();
        assert_eq!(engine.errors().kind(FieldName::Email), Some(ErrorKind::Format));

        // Still invalid, but the error goes away until the next validation
        engine.set_field(FieldName::Email, "still bad");
        assert!(engine.error(FieldName::Email).is_none());
        assert!(engine.error(FieldName::Name).is_some());

        let errors = engine.validate();
        assert_eq!(errors.kind(FieldName::Email), Some(ErrorKind::Format));
    }

    #[test]
    fn test_submit_success_returns_snapshot_and_resets() {
        let mut engine = valid_engine();
        let snapshot = engine.submit().unwrap();

        assert_eq!(snapshot.get(FieldName::Name), "Jane Doe");
        assert_eq!(snapshot.get(FieldName::Email), "jane@example.com");
        assert_eq!(snapshot.get(FieldName::Phone), "5551234567");
        assert_eq!(snapshot.get(FieldName::Subject), "Hi");
        assert_eq!(
            snapshot.get(FieldName::Message),
            "This is a long enough message."
        );

        for field in FieldName::ALL {
            assert_eq!(engine.value(field), "");
        }
        assert!(engine.errors().is_empty());
    }

    #[test]
    fn test_submit_then_validate_reports_required_everywhere() {
        let mut engine = valid_engine();
        assert!(engine.submit().is_ok());

        let errors = engine.validate();
        for field in FieldName::ALL {
            assert_eq!(errors.kind(field), Some(ErrorKind::Required));
        }
    }

    #[test]
    fn test_submit_failure_keeps_values() {
        let mut engine = FormValidationEngine::new();
        let values = ["", "bad", "123", "", "short"];
        fill(&mut engine, values);

        let failed = engine.submit().unwrap_err();
        let errors = failed.errors();
        assert_eq!(errors.kind(FieldName::Name), Some(ErrorKind::Required));
        assert_eq!(errors.kind(FieldName::Email), Some(ErrorKind::Format));
        assert_eq!(errors.kind(FieldName::Phone), Some(ErrorKind::Format));
        assert_eq!(errors.kind(FieldName::Subject), Some(ErrorKind::Required));
        assert_eq!(errors.kind(FieldName::Message), Some(ErrorKind::TooShort));

        assert_eq!(engine.errors(), errors);
        for (field, value) in FieldName::ALL.iter().zip(values) {
            assert_eq!(engine.value(*field), value);
        }
    }

    #[test]
    fn test_correcting_after_failed_submit() {
        let mut engine = valid_engine();
        engine.set_field(FieldName::Phone, "12345");
        assert!(engine.submit().is_err());

        engine.set_field(FieldName::Phone, "123-456-7890");
        assert!(engine.errors().is_empty());
        let snapshot = engine.submit().unwrap();
        assert_eq!(snapshot.get(FieldName::Phone), "123-456-7890");
    }

    #[test]
    fn test_is_valid_leaves_errors_untouched() {
        let engine = FormValidationEngine::new();
        assert!(!engine.is_valid());
        assert!(engine.errors().is_empty());

        let mut engine = valid_engine();
        assert!(engine.is_valid());
        engine.set_field(FieldName::Email, "nope");
        assert!(!engine.is_valid());
    }

    #[test]
    fn test_input_truncates_message_to_cap() {
        let mut engine = FormValidationEngine::new();
        engine.input(FieldName::Message, &"a".repeat(600));
        assert_eq!(engine.char_count(FieldName::Message), 500);
        assert_eq!(engine.char_count_label(FieldName::Message), "500/500");

        // No cap outside the input layer
        engine.set_field(FieldName::Message, "b".repeat(600));
        assert_eq!(engine.char_count(FieldName::Message), 600);
        assert!(engine.validate().get(FieldName::Message).is_none());
    }

    #[test]
    fn test_input_uncapped_field() {
        let mut engine = FormValidationEngine::new();
        let name: String = Name().fake();
        engine.input(FieldName::Name, &name);
        assert_eq!(engine.value(FieldName::Name), name);
        assert_eq!(
            engine.char_count_label(FieldName::Name),
            name.chars().count().to_string()
        );
    }

    #[test]
    fn test_submit_with_generated_values() {
        let mut engine = FormValidationEngine::new();
        let name: String = Name().fake();
        let message: String = Sentence(4..8).fake();
        engine.input(FieldName::Name, &name);
        engine.input(FieldName::Email, "someone@example.org");
        engine.input(FieldName::Phone, "+44 20 7946 0958");
        engine.input(FieldName::Subject, "Support");
        engine.input(FieldName::Message, &format!("{} Thanks!", message));

        let snapshot = engine.submit().unwrap();
        assert_eq!(snapshot.get(FieldName::Name), name);
        assert!(engine.values().is_empty());
    }

    #[test]
    fn test_custom_rules_apply() {
        let mut engine = FormValidationEngine::with_rules(RuleSettings {
            message_min_length: 2,
            message_max_length: 5,
            phone_min_digits: 3,
        });
        engine.input(FieldName::Message, "abcdefgh");
        assert_eq!(engine.value(FieldName::Message), "abcde");
        engine.set_field(FieldName::Phone, "1-2-3");
        let errors = engine.validate();
        assert!(!errors.contains(FieldName::Phone));
        assert!(!errors.contains(FieldName::Message));
    }
}
