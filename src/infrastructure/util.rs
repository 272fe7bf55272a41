// src/infrastructure/util.rs
use crate::application::ports::util::Transliterator;
use slug::slugify;

/// Transliterator backed by the `slug` crate. The crate has no per-language
/// rules, so the language hint is accepted and ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTransliterator;

impl Transliterator for DefaultTransliterator {
    fn slugify(&self, text: &str, separator: &str, _language: Option<&str>) -> String {
        let slug = slugify(text);
        if separator == "-" {
            slug
        } else {
            slug.split('-').collect::<Vec<_>>().join(separator)
        }
    }
}
