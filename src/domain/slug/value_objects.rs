// src/domain/slug/value_objects.rs
use std::collections::BTreeMap;
use std::fmt;

/// Language tag to text, ordered by tag so comparisons and output are stable.
pub type Translations = BTreeMap<String, String>;

/// Value held by a named record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Translations(Translations),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Translations(_) => None,
        }
    }

    pub fn as_translations(&self) -> Option<&Translations> {
        match self {
            Self::Text(_) => None,
            Self::Translations(map) => Some(map),
        }
    }

    /// Read a translatable value. Text is taken to be the serialized JSON
    /// form; blank text and `null` decode to an empty map.
    pub fn into_translations(self) -> Result<Translations, serde_json::Error> {
        match self {
            Self::Translations(map) => Ok(map),
            Self::Text(serialized) => decode_translations(&serialized),
        }
    }
}

fn decode_translations(serialized: &str) -> Result<Translations, serde_json::Error> {
    if serialized.trim().is_empty() {
        return Ok(Translations::new());
    }
    serde_json::from_str::<Option<Translations>>(serialized).map(Option::unwrap_or_default)
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Translations> for FieldValue {
    fn from(value: Translations) -> Self {
        Self::Translations(value)
    }
}

/// Primary key of a record. Integer keys are usually store-assigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKey {
    Int(i64),
    Text(String),
}

impl RecordKey {
    /// Placeholder excluded for records whose store-assigned key is not known yet.
    pub const UNASSIGNED: RecordKey = RecordKey::Int(0);
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A slug produced in one generation pass: a single value, or one value per
/// language for translatable sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugCandidate {
    Single(String),
    PerLanguage(Translations),
}

impl SlugCandidate {
    pub fn get(&self, language: &str) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::PerLanguage(map) => map.get(language).map(String::as_str),
        }
    }
}

impl From<SlugCandidate> for FieldValue {
    fn from(value: SlugCandidate) -> Self {
        match value {
            SlugCandidate::Single(slug) => FieldValue::Text(slug),
            SlugCandidate::PerLanguage(map) => FieldValue::Translations(map),
        }
    }
}
