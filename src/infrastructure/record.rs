// src/infrastructure/record.rs
use std::collections::BTreeMap;

use crate::domain::slug::{FieldValue, PersistableRecord, RecordKey, SlugOptions, SluggableRecord};

pub const DEFAULT_KEY_NAME: &str = "id";

/// Record backed by a plain field map, with a snapshot of the values last
/// persisted.
#[derive(Debug, Clone)]
pub struct MapRecord {
    options: SlugOptions,
    key_name: String,
    key: Option<RecordKey>,
    store_assigned_key: bool,
    fields: BTreeMap<String, FieldValue>,
    originals: BTreeMap<String, FieldValue>,
}

impl MapRecord {
    pub fn new(options: SlugOptions) -> Self {
        Self {
            options,
            key_name: DEFAULT_KEY_NAME.to_string(),
            key: None,
            store_assigned_key: true,
            fields: BTreeMap::new(),
            originals: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_original(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.originals.insert(name.into(), value.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<RecordKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = key_name.into();
        self
    }

    /// Keys chosen by the caller rather than the store.
    pub fn with_natural_key(mut self) -> Self {
        self.store_assigned_key = false;
        self
    }

    /// Treat the current values as already persisted.
    pub fn persisted(mut self) -> Self {
        self.sync_original();
        self
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }
}

impl SluggableRecord for MapRecord {
    fn slug_options(&self) -> SlugOptions {
        self.options.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }

    fn original(&self, name: &str) -> Option<FieldValue> {
        self.originals.get(name).cloned()
    }

    fn key(&self) -> Option<RecordKey> {
        self.key.clone()
    }

    fn key_name(&self) -> &str {
        &self.key_name
    }

    fn key_is_store_assigned(&self) -> bool {
        self.store_assigned_key
    }
}

impl PersistableRecord for MapRecord {
    fn assign_key(&mut self, key: RecordKey) {
        self.key = Some(key);
    }

    fn sync_original(&mut self) {
        self.originals = self.fields.clone();
    }
}
