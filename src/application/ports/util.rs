// src/application/ports/util.rs

/// Turns free text into a lowercase, separator-joined token sequence.
/// Implementations must be deterministic and side-effect free.
pub trait Transliterator: Send + Sync {
    fn slugify(&self, text: &str, separator: &str, language: Option<&str>) -> String;
}
