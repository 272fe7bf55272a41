// tests/support/mocks/store.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::slug::{SlugExistenceRepository, SlugLookup};
use sluggable::infrastructure::repositories::InMemorySlugStore;

/// Delegates to a real store and keeps every lookup it was asked.
pub struct RecordingExistence {
    inner: Arc<InMemorySlugStore>,
    pub lookups: Mutex<Vec<SlugLookup>>,
}

impl RecordingExistence {
    pub fn new(inner: Arc<InMemorySlugStore>) -> Self {
        Self {
            inner,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<SlugLookup> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugExistenceRepository for RecordingExistence {
    async fn other_record_has_slug(&self, lookup: &SlugLookup) -> DomainResult<bool> {
        self.lookups.lock().unwrap().push(lookup.clone());
        self.inner.other_record_has_slug(lookup).await
    }
}

/// Answers "free" for the first `stale_calls` lookups, as a concurrent writer
/// would see it, then reports the real store state.
pub struct StaleExistence {
    inner: Arc<InMemorySlugStore>,
    remaining_stale: AtomicUsize,
}

impl StaleExistence {
    pub fn new(inner: Arc<InMemorySlugStore>, stale_calls: usize) -> Self {
        Self {
            inner,
            remaining_stale: AtomicUsize::new(stale_calls),
        }
    }
}

#[async_trait]
impl SlugExistenceRepository for StaleExistence {
    async fn other_record_has_slug(&self, lookup: &SlugLookup) -> DomainResult<bool> {
        let stale = self
            .remaining_stale
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if stale {
            return Ok(false);
        }
        self.inner.other_record_has_slug(lookup).await
    }
}

/// Store that is always unavailable.
pub struct FailingExistence;

#[async_trait]
impl SlugExistenceRepository for FailingExistence {
    async fn other_record_has_slug(&self, _lookup: &SlugLookup) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
