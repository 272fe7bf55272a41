// tests/support/mocks/util.rs
use sluggable::application::ports::util::Transliterator;

/// Prefixes the language hint so tests can see which tag was used.
#[derive(Clone, Default)]
pub struct TaggingTransliterator;

impl Transliterator for TaggingTransliterator {
    fn slugify(&self, text: &str, separator: &str, language: Option<&str>) -> String {
        let words = text.split_whitespace().collect::<Vec<_>>().join(separator);
        format!("{}:{}", language.unwrap_or("none"), words.to_lowercase())
    }
}
