//! Form field value objects.
//!
//! `FieldName` enumerates the fixed slots of the contact form. `FormState`
//! holds one value per slot and `Snapshot` is the frozen copy handed out on
//! a successful submit.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Specifying the contact form fields, in display order.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldName {
    /// Number of fields on the form.
    pub const COUNT: usize = 5;

    /// Every field in display order.
    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Stable key used in serialized output and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Full name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone",
            FieldName::Subject => "Subject",
            FieldName::Message => "Message",
        }
    }

    /// Example input shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Name => "Enter your full name",
            FieldName::Email => "example@mail.com",
            FieldName::Phone => "+1 (555) 123-4567",
            FieldName::Subject => "What would you like to talk about?",
            FieldName::Message => "Tell us in detail how we can help you...",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::Message)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Current value of every form field.
///
/// Backed by a fixed array indexed by `FieldName`, so each field always has
/// exactly one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; FieldName::COUNT],
}

impl FormState {
    /// Return a new instance with every field empty.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        self.values[field.index()] = value;
    }

    /// Reset every field to the empty string.
    ///
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Iterate over `(field, value)` pairs in display order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldName::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

/// Frozen copy of the form values taken at a successful submit.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Snapshot(FormState);

impl Snapshot {
    pub(crate) fn new(values: FormState) -> Self {
        Snapshot(values)
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter()
    }

    /// Serialize to a compact JSON object keyed by field name.
    ///
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(field, value)| {
                    (
                        field.as_str().to_string(),
                        serde_json::Value::String(value.to_string()),
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        assert!(FieldName::Name < FieldName::Email);
        assert!(FieldName::Email < FieldName::Phone);
        assert!(FieldName::Phone < FieldName::Subject);
        assert!(FieldName::Subject < FieldName::Message);
        assert_eq!(FieldName::ALL.len(), FieldName::COUNT);
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<FieldName> = FieldName::ALL
            .iter()
            .copied()
            .filter(FieldName::is_multiline)
            .collect();
        assert_eq!(multiline, vec![FieldName::Message]);
    }

    #[test]
    fn test_form_state_starts_empty() {
        let state = FormState::new();
        assert!(state.is_empty());
        for field in FieldName::ALL {
            assert_eq!(state.get(field), "");
        }
        assert_eq!(state.iter().count(), FieldName::COUNT);
    }

    #[test]
    fn test_form_state_set_and_clear() {
        let mut state = FormState::new();
        state.set(FieldName::Phone, "5551234567".to_string());
        assert_eq!(state.get(FieldName::Phone), "5551234567");
        assert_eq!(state.get(FieldName::Name), "");
        assert!(!state.is_empty());

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_snapshot_json_keys() {
        let mut state = FormState::new();
        state.set(FieldName::Name, "Jane Doe".to_string());
        let snapshot = Snapshot::new(state);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json, snapshot.to_json());
        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["message"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(FieldName::COUNT));
    }
}
