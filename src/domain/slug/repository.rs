// src/domain/slug/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::value_objects::RecordKey;
use async_trait::async_trait;

/// One existence question asked while resolving a unique slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugLookup {
    pub slug_field: String,
    pub key_name: String,
    pub candidate: String,
    /// Record to leave out of the search. `None` excludes nothing.
    pub exclude_key: Option<RecordKey>,
    /// Language entry of a translatable slug field to compare against.
    pub language: Option<String>,
}

/// Answers whether another record already holds a slug.
///
/// Implementations must search the whole collection, ignoring any soft-delete
/// or tenant filtering the store normally applies.
#[async_trait]
pub trait SlugExistenceRepository: Send + Sync {
    async fn other_record_has_slug(&self, lookup: &SlugLookup) -> DomainResult<bool>;
}

/// Persists slugged records. A duplicate slug must surface as
/// `DomainError::Conflict` so callers can regenerate and retry.
#[async_trait]
pub trait SluggableWriteRepository: Send + Sync {
    async fn insert(&self, record: &dyn SluggableRecord) -> DomainResult<RecordKey>;
    async fn update(&self, record: &dyn SluggableRecord) -> DomainResult<()>;
}
