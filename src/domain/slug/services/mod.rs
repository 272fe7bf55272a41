// src/domain/slug/services/mod.rs
mod custom;
mod derivation;
mod uniqueness;

use std::sync::Arc;

use crate::application::ports::util::Transliterator;
use crate::domain::errors::{DomainResult, InvalidSlugOption};
use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::repository::SlugExistenceRepository;
use crate::domain::slug::value_objects::SlugCandidate;

/// Point in a record's save sequence asking for a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugTrigger {
    Create,
    Update,
    /// Explicit request; ignores the create/update policy flags.
    Explicit,
}

/// Domain service responsible for producing unique slugs for records.
pub struct SlugService {
    existence: Arc<dyn SlugExistenceRepository>,
    transliterator: Arc<dyn Transliterator>,
}

impl SlugService {
    pub fn new(
        existence: Arc<dyn SlugExistenceRepository>,
        transliterator: Arc<dyn Transliterator>,
    ) -> Self {
        Self {
            existence,
            transliterator,
        }
    }

    pub async fn generate_on_create(
        &self,
        record: &mut dyn SluggableRecord,
    ) -> DomainResult<Option<SlugCandidate>> {
        self.handle(SlugTrigger::Create, record).await
    }

    pub async fn generate_on_update(
        &self,
        record: &mut dyn SluggableRecord,
    ) -> DomainResult<Option<SlugCandidate>> {
        self.handle(SlugTrigger::Update, record).await
    }

    pub async fn generate(&self, record: &mut dyn SluggableRecord) -> DomainResult<SlugCandidate> {
        let options = record.slug_options();
        self.add_slug(&options, record).await
    }

    /// Run generation for `trigger`. Returns `None` when the options disable
    /// generation for that trigger.
    pub async fn handle(
        &self,
        trigger: SlugTrigger,
        record: &mut dyn SluggableRecord,
    ) -> DomainResult<Option<SlugCandidate>> {
        let options = record.slug_options();
        let enabled = match trigger {
            SlugTrigger::Create => options.generate_on_create,
            SlugTrigger::Update => options.generate_on_update,
            SlugTrigger::Explicit => true,
        };
        if !enabled {
            tracing::debug!(?trigger, "slug generation disabled for trigger");
            return Ok(None);
        }
        self.add_slug(&options, record).await.map(Some)
    }

    /// Reject options that cannot produce a slug.
    pub fn guard(options: &SlugOptions) -> Result<(), InvalidSlugOption> {
        match &options.source {
            SlugSource::FieldList(fields) if fields.is_empty() => {
                return Err(InvalidSlugOption::MissingSourceFields);
            }
            SlugSource::Translatable(field) if field.is_empty() => {
                return Err(InvalidSlugOption::MissingSourceFields);
            }
            _ => {}
        }
        if options.slug_field.is_empty() {
            return Err(InvalidSlugOption::MissingSlugField);
        }
        if options.maximum_length == 0 {
            return Err(InvalidSlugOption::InvalidMaximumLength);
        }
        Ok(())
    }

    async fn add_slug(
        &self,
        options: &SlugOptions,
        record: &mut dyn SluggableRecord,
    ) -> DomainResult<SlugCandidate> {
        Self::guard(options)?;

        let candidate = match custom::custom_slug(options, &*record) {
            Some(custom) => custom,
            None => derivation::derive_candidate(options, &*record, self.transliterator.as_ref()),
        };

        let slug = if options.require_unique {
            uniqueness::make_unique(self.existence.as_ref(), options, &*record, candidate).await?
        } else {
            candidate
        };

        record.set_field(&options.slug_field, slug.clone().into());
        tracing::debug!(slug_field = %options.slug_field, ?slug, "slug generated");
        Ok(slug)
    }
}
