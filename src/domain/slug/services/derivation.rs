// src/domain/slug/services/derivation.rs
use crate::application::ports::util::Transliterator;
use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::record::SluggableRecord;
use crate::domain::slug::value_objects::{FieldValue, SlugCandidate, Translations};

/// Cut `text` to at most `maximum_length` characters.
pub(crate) fn truncate(text: &str, maximum_length: usize) -> &str {
    match text.char_indices().nth(maximum_length) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Truncated source text, before transliteration.
pub(crate) fn source_text(options: &SlugOptions, record: &dyn SluggableRecord) -> SlugCandidate {
    let max = options.maximum_length;
    match &options.source {
        SlugSource::Translatable(field) => SlugCandidate::PerLanguage(
            record
                .translations(field)
                .into_iter()
                .map(|(language, text)| {
                    let text = truncate(&text, max).to_string();
                    (language, text)
                })
                .collect(),
        ),
        SlugSource::Computed(source) => {
            let text = source(record);
            SlugCandidate::Single(truncate(&text, max).to_string())
        }
        SlugSource::FieldList(fields) => {
            let joined = fields
                .iter()
                .map(|name| field_text(record, name))
                .collect::<Vec<_>>()
                .join(&options.separator);
            SlugCandidate::Single(truncate(&joined, max).to_string())
        }
    }
}

fn field_text(record: &dyn SluggableRecord, name: &str) -> String {
    match record.field(name) {
        Some(FieldValue::Text(text)) => text,
        Some(FieldValue::Translations(_)) => {
            tracing::warn!(field = name, "translatable field used in a plain field list; treating as empty");
            String::new()
        }
        None => String::new(),
    }
}

/// Derive the non-unique slug for `record` from its configured source.
pub(crate) fn derive_candidate(
    options: &SlugOptions,
    record: &dyn SluggableRecord,
    transliterator: &dyn Transliterator,
) -> SlugCandidate {
    let separator = options.separator.as_str();
    match source_text(options, record) {
        SlugCandidate::Single(text) => SlugCandidate::Single(transliterator.slugify(
            &text,
            separator,
            options.language.as_deref(),
        )),
        SlugCandidate::PerLanguage(map) => SlugCandidate::PerLanguage(
            map.into_iter()
                .map(|(language, text)| {
                    let slug = transliterator.slugify(&text, separator, Some(&language));
                    (language, slug)
                })
                .collect::<Translations>(),
        ),
    }
}
