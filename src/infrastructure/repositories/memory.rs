// src/infrastructure/repositories/memory.rs
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{
    FieldValue, RecordKey, SlugExistenceRepository, SlugLookup, SluggableRecord,
    SluggableWriteRepository,
};

/// Single-collection store keeping each record's slug value by key.
/// Writes enforce slug uniqueness the way a database unique index would.
pub struct InMemorySlugStore {
    slug_field: String,
    rows: Mutex<BTreeMap<RecordKey, FieldValue>>,
}

impl InMemorySlugStore {
    pub fn new(slug_field: impl Into<String>) -> Self {
        Self {
            slug_field: slug_field.into(),
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    /// Store a slug for `key` directly, bypassing the uniqueness check.
    pub fn seed(&self, key: impl Into<RecordKey>, slug: impl Into<FieldValue>) -> DomainResult<()> {
        self.rows()?.insert(key.into(), slug.into());
        Ok(())
    }

    pub fn slug_of(&self, key: &RecordKey) -> DomainResult<Option<FieldValue>> {
        Ok(self.rows()?.get(key).cloned())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.rows()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.rows()?.is_empty())
    }

    fn rows(&self) -> DomainResult<MutexGuard<'_, BTreeMap<RecordKey, FieldValue>>> {
        self.rows
            .lock()
            .map_err(|_| DomainError::Persistence("slug store lock poisoned".into()))
    }

    fn next_key(rows: &BTreeMap<RecordKey, FieldValue>) -> RecordKey {
        let max = rows
            .keys()
            .filter_map(|key| match key {
                RecordKey::Int(id) => Some(*id),
                RecordKey::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        RecordKey::Int(max + 1)
    }

    fn ensure_unique(
        rows: &BTreeMap<RecordKey, FieldValue>,
        key: Option<&RecordKey>,
        value: &FieldValue,
    ) -> DomainResult<()> {
        let clash = rows
            .iter()
            .filter(|(existing, _)| Some(*existing) != key)
            .any(|(_, stored)| match (stored, value) {
                (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
                (FieldValue::Translations(a), FieldValue::Translations(b)) => b
                    .iter()
                    .any(|(language, slug)| a.get(language) == Some(slug)),
                _ => false,
            });
        if clash {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        Ok(())
    }

    fn slug_value(&self, record: &dyn SluggableRecord) -> FieldValue {
        record
            .field(&self.slug_field)
            .unwrap_or_else(|| FieldValue::Text(String::new()))
    }
}

#[async_trait]
impl SlugExistenceRepository for InMemorySlugStore {
    async fn other_record_has_slug(&self, lookup: &SlugLookup) -> DomainResult<bool> {
        let rows = self.rows()?;
        Ok(rows
            .iter()
            .filter(|(key, _)| lookup.exclude_key.as_ref() != Some(*key))
            .any(|(_, stored)| match (&lookup.language, stored) {
                (None, FieldValue::Text(slug)) => *slug == lookup.candidate,
                (Some(language), FieldValue::Translations(map)) => {
                    map.get(language) == Some(&lookup.candidate)
                }
                _ => false,
            }))
    }
}

#[async_trait]
impl SluggableWriteRepository for InMemorySlugStore {
    async fn insert(&self, record: &dyn SluggableRecord) -> DomainResult<RecordKey> {
        let value = self.slug_value(record);
        let mut rows = self.rows()?;
        let key = record.key().unwrap_or_else(|| Self::next_key(&rows));
        if rows.contains_key(&key) {
            return Err(DomainError::Conflict(format!("record {key} already exists")));
        }
        Self::ensure_unique(&rows, Some(&key), &value)?;
        rows.insert(key.clone(), value);
        Ok(key)
    }

    async fn update(&self, record: &dyn SluggableRecord) -> DomainResult<()> {
        let key = record
            .key()
            .ok_or_else(|| DomainError::Validation("cannot update a record without a key".into()))?;
        let value = self.slug_value(record);
        let mut rows = self.rows()?;
        if !rows.contains_key(&key) {
            return Err(DomainError::NotFound(format!("record {key} not found")));
        }
        Self::ensure_unique(&rows, Some(&key), &value)?;
        rows.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::{SlugOptions, Translations};
    use crate::infrastructure::record::MapRecord;

    fn lookup(candidate: &str, exclude: Option<RecordKey>, language: Option<&str>) -> SlugLookup {
        SlugLookup {
            slug_field: "slug".into(),
            key_name: "id".into(),
            candidate: candidate.into(),
            exclude_key: exclude,
            language: language.map(str::to_string),
        }
    }

    fn record(slug: &str) -> MapRecord {
        MapRecord::new(SlugOptions::create()).with_field("slug", slug)
    }

    #[tokio::test]
    async fn existence_honours_exclusion() {
        let store = InMemorySlugStore::new("slug");
        store.seed(1_i64, "taken").unwrap();

        assert!(store.other_record_has_slug(&lookup("taken", None, None)).await.unwrap());
        assert!(
            store
                .other_record_has_slug(&lookup("taken", Some(RecordKey::UNASSIGNED), None))
                .await
                .unwrap()
        );
        assert!(
            !store
                .other_record_has_slug(&lookup("taken", Some(RecordKey::Int(1)), None))
                .await
                .unwrap()
        );
        assert!(!store.other_record_has_slug(&lookup("free", None, None)).await.unwrap());
    }

    #[tokio::test]
    async fn existence_is_scoped_to_language() {
        let store = InMemorySlugStore::new("slug");
        let mut map = Translations::new();
        map.insert("en".into(), "hello".into());
        store.seed(1_i64, map).unwrap();

        assert!(store.other_record_has_slug(&lookup("hello", None, Some("en"))).await.unwrap());
        assert!(!store.other_record_has_slug(&lookup("hello", None, Some("fr"))).await.unwrap());
        assert!(!store.other_record_has_slug(&lookup("hello", None, None)).await.unwrap());
    }

    #[tokio::test]
    async fn insert_assigns_sequential_keys() {
        let store = InMemorySlugStore::new("slug");
        let first = store.insert(&record("a")).await.unwrap();
        let second = store.insert(&record("b")).await.unwrap();

        assert_eq!(first, RecordKey::Int(1));
        assert_eq!(second, RecordKey::Int(2));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_slug() {
        let store = InMemorySlugStore::new("slug");
        store.insert(&record("dup")).await.unwrap();

        let err = store.insert(&record("dup")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn update_keeps_own_slug_and_requires_key() {
        let store = InMemorySlugStore::new("slug");
        let key = store.insert(&record("mine")).await.unwrap();

        store.update(&record("mine").with_key(key.clone())).await.unwrap();
        store.update(&record("renamed").with_key(key.clone())).await.unwrap();
        assert_eq!(store.slug_of(&key).unwrap(), Some(FieldValue::text("renamed")));

        let err = store.update(&record("x")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = store.update(&record("x").with_key(99_i64)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
