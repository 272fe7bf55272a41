// src/application/commands/save.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainError;
use crate::domain::slug::{
    PersistableRecord, RecordKey, SlugService, SlugTrigger, SluggableWriteRepository,
};

/// Runs slug generation at the right point of a record's save sequence and
/// persists the result.
///
/// Uniqueness is only checked before writing, so two concurrent saves can
/// still pick the same slug. The store rejects the second write as a
/// conflict; the save is then regenerated and retried.
pub struct SluggedSaveService {
    slugs: Arc<SlugService>,
    write_repo: Arc<dyn SluggableWriteRepository>,
    max_attempts: u32,
}

impl SluggedSaveService {
    pub fn new(
        slugs: Arc<SlugService>,
        write_repo: Arc<dyn SluggableWriteRepository>,
        max_attempts: u32,
    ) -> Self {
        Self {
            slugs,
            write_repo,
            max_attempts: max_attempts.max(1),
        }
    }

    pub async fn create<R: PersistableRecord>(&self, record: &mut R) -> ApplicationResult<RecordKey> {
        let mut attempt = 1;
        loop {
            self.slugs.handle(SlugTrigger::Create, &mut *record).await?;
            match self.write_repo.insert(&*record).await {
                Ok(key) => {
                    record.assign_key(key.clone());
                    record.sync_original();
                    tracing::info!(%key, attempt, "record created");
                    return Ok(key);
                }
                Err(DomainError::Conflict(reason)) => {
                    self.check_retry(attempt, reason)?;
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub async fn update<R: PersistableRecord>(&self, record: &mut R) -> ApplicationResult<()> {
        let mut attempt = 1;
        loop {
            self.slugs.handle(SlugTrigger::Update, &mut *record).await?;
            match self.write_repo.update(&*record).await {
                Ok(()) => {
                    record.sync_original();
                    tracing::info!(key = ?record.key(), attempt, "record updated");
                    return Ok(());
                }
                Err(DomainError::Conflict(reason)) => {
                    self.check_retry(attempt, reason)?;
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn check_retry(&self, attempt: u32, reason: String) -> ApplicationResult<()> {
        if attempt >= self.max_attempts {
            tracing::warn!(attempt, %reason, "giving up on slug conflict");
            return Err(ApplicationError::conflict(reason));
        }
        tracing::debug!(attempt, %reason, "slug conflict on save, regenerating");
        Ok(())
    }
}
