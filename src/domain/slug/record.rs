// src/domain/slug/record.rs
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::value_objects::{FieldValue, RecordKey, Translations};

/// Field access the slug generator needs from a record.
///
/// `original` returns the value as last persisted. Translatable values may be
/// reported either as a map or in their serialized JSON form.
pub trait SluggableRecord: Send + Sync {
    fn slug_options(&self) -> SlugOptions;

    fn field(&self, name: &str) -> Option<FieldValue>;

    fn set_field(&mut self, name: &str, value: FieldValue);

    fn original(&self, name: &str) -> Option<FieldValue>;

    fn key(&self) -> Option<RecordKey>;

    fn key_name(&self) -> &str;

    /// Whether the store assigns the key on insert (auto-increment).
    fn key_is_store_assigned(&self) -> bool {
        true
    }

    fn translations(&self, name: &str) -> Translations {
        read_translations(self.field(name), name)
    }
}

/// Absent or undecodable translatable values count as an empty map.
pub(crate) fn read_translations(value: Option<FieldValue>, field: &str) -> Translations {
    match value.map(FieldValue::into_translations) {
        None => Translations::new(),
        Some(Ok(map)) => map,
        Some(Err(err)) => {
            tracing::warn!(field, error = %err, "translations are not valid JSON");
            Translations::new()
        }
    }
}

/// Records that can be written back by a [`SluggableWriteRepository`].
///
/// [`SluggableWriteRepository`]: crate::domain::slug::repository::SluggableWriteRepository
pub trait PersistableRecord: SluggableRecord {
    fn assign_key(&mut self, key: RecordKey);

    /// Make the current field values the new "original" snapshot.
    fn sync_original(&mut self);
}
