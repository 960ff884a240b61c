//! Form field names and per-field validation errors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields rendered by the client's forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    BirthDate,
    ZipCode,
    Email,
}

impl FieldName {
    /// Key used by the voter API for this field
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::BirthDate => "birth_date",
            FieldName::ZipCode => "zip_code",
            FieldName::Email => "email",
        }
    }

    /// Human-readable label shown next to the control
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::BirthDate => "Birth Date",
            FieldName::ZipCode => "Zip Code",
            FieldName::Email => "Email",
        }
    }

    /// Look a field up by its API key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.key() == key)
    }

    pub fn all() -> &'static [FieldName] {
        &[
            FieldName::FirstName,
            FieldName::LastName,
            FieldName::BirthDate,
            FieldName::ZipCode,
            FieldName::Email,
        ]
    }
}

/// Validation messages keyed by API field name.
///
/// Decodes directly from a rejection body such as
/// `{"zip_code": ["Enter a valid zip code."]}`. Messages keep the order the
/// API sent them in. Keys the client does not render are retained but never
/// looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages for one field; empty when the field has no entry
    pub fn for_field(&self, field: FieldName) -> &[String] {
        self.get(field.key())
    }

    /// Messages for a raw API key; empty when absent
    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a message to a field
    pub fn push(&mut self, field: FieldName, message: impl Into<String>) {
        self.0
            .entry(field.key().to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder form of [`FormErrors::push`]
    pub fn with(mut self, field: FieldName, message: impl Into<String>) -> Self {
        self.push(field, message);
        self
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of fields carrying at least one entry
    pub fn len(&self) -> usize {
        self.0.values().filter(|messages| !messages.is_empty()).count()
    }

    /// True when no field has a non-empty message list
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Keys with messages that none of `shown` displays, e.g.
    /// `non_field_errors`
    pub fn unshown_keys(&self, shown: &[FieldName]) -> Vec<&str> {
        self.iter()
            .filter(|(key, messages)| {
                !messages.is_empty() && !shown.iter().any(|field| field.key() == *key)
            })
            .map(|(key, _)| key)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
