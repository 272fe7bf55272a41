// src/domain/slug/services/uniqueness.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::repository::{SlugExistenceRepository, SlugLookup};
use crate::domain::slug::value_objects::{RecordKey, SlugCandidate, Translations};

/// Key to leave out of existence checks. A record still waiting for its
/// store-assigned key is compared against the zero placeholder.
pub(crate) fn exclusion_key(record: &dyn SluggableRecord) -> Option<RecordKey> {
    match record.key() {
        Some(key) => Some(key),
        None if record.key_is_store_assigned() => Some(RecordKey::UNASSIGNED),
        None => None,
    }
}

/// Append `separator` + counter to each candidate until no other record holds
/// it. The empty string is always treated as taken. There is no upper bound
/// on the counter.
pub(crate) async fn make_unique(
    existence: &dyn SlugExistenceRepository,
    options: &SlugOptions,
    record: &dyn SluggableRecord,
    candidate: SlugCandidate,
) -> DomainResult<SlugCandidate> {
    let mut lookup = SlugLookup {
        slug_field: options.slug_field.clone(),
        key_name: record.key_name().to_string(),
        candidate: String::new(),
        exclude_key: exclusion_key(record),
        language: None,
    };

    match candidate {
        SlugCandidate::Single(base) => {
            let slug = make_string_unique(existence, &mut lookup, base, &options.separator).await?;
            Ok(SlugCandidate::Single(slug))
        }
        SlugCandidate::PerLanguage(map) => {
            let mut unique = Translations::new();
            for (language, base) in map {
                lookup.language = Some(language.clone());
                let slug =
                    make_string_unique(existence, &mut lookup, base, &options.separator).await?;
                unique.insert(language, slug);
            }
            Ok(SlugCandidate::PerLanguage(unique))
        }
    }
}

async fn make_string_unique(
    existence: &dyn SlugExistenceRepository,
    lookup: &mut SlugLookup,
    base: String,
    separator: &str,
) -> DomainResult<String> {
    lookup.candidate = base.clone();
    let mut suffix = 1u64;

    while lookup.candidate.is_empty() || existence.other_record_has_slug(lookup).await? {
        tracing::debug!(
            slug_field = %lookup.slug_field,
            language = lookup.language.as_deref(),
            taken = %lookup.candidate,
            "slug already taken"
        );
        lookup.candidate = format!("{base}{separator}{suffix}");
        suffix += 1;
    }

    Ok(std::mem::take(&mut lookup.candidate))
}
