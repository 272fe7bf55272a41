// src/domain/slug/services/custom.rs
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::record::{SluggableRecord, read_translations};
use crate::domain::slug::value_objects::{FieldValue, SlugCandidate};

/// Returns the manually set slug when the slug field differs from what was
/// last persisted, `None` otherwise.
pub(crate) fn custom_slug(
    options: &SlugOptions,
    record: &dyn SluggableRecord,
) -> Option<SlugCandidate> {
    let slug_field = options.slug_field.as_str();

    if options.is_translatable() {
        let persisted = read_translations(record.original(slug_field), slug_field);
        let current = record.translations(slug_field);
        if persisted != current {
            tracing::debug!(slug_field, "custom translatable slug detected");
            return Some(SlugCandidate::PerLanguage(current));
        }
        return None;
    }

    let persisted = scalar_text(record.original(slug_field));
    let current = scalar_text(record.field(slug_field));
    if persisted != current {
        tracing::debug!(slug_field, slug = %current, "custom slug detected");
        return Some(SlugCandidate::Single(current));
    }
    None
}

fn scalar_text(value: Option<FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(text)) => text,
        Some(FieldValue::Translations(_)) | None => String::new(),
    }
}
