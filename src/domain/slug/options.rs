// src/domain/slug/options.rs
use std::fmt;
use std::sync::Arc;

use crate::config::SlugConfig;
use crate::domain::slug::record::SluggableRecord;

pub type SlugSourceFn = Arc<dyn Fn(&dyn SluggableRecord) -> String + Send + Sync>;

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_MAXIMUM_LENGTH: usize = 250;

/// Where the text a slug is built from comes from.
#[derive(Clone)]
pub enum SlugSource {
    /// Named fields, joined in order with the separator.
    FieldList(Vec<String>),
    /// A single multi-language field; one slug is produced per language.
    Translatable(String),
    /// Text computed from the whole record.
    Computed(SlugSourceFn),
}

impl fmt::Debug for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldList(fields) => f.debug_tuple("FieldList").field(fields).finish(),
            Self::Translatable(field) => f.debug_tuple("Translatable").field(field).finish(),
            Self::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

/// How slugs are built for one record type.
///
/// Construction never fails; the generator's guard rejects unusable
/// combinations when generation is attempted.
#[derive(Debug, Clone)]
pub struct SlugOptions {
    pub source: SlugSource,
    pub slug_field: String,
    pub separator: String,
    pub language: Option<String>,
    pub maximum_length: usize,
    pub generate_on_create: bool,
    pub generate_on_update: bool,
    pub require_unique: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            source: SlugSource::FieldList(Vec::new()),
            slug_field: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_on_create: true,
            generate_on_update: true,
            require_unique: true,
        }
    }
}

impl SlugOptions {
    pub fn create() -> Self {
        Self::default()
    }

    /// Options seeded with the separator, language, length and policy
    /// defaults from configuration. Source and slug field still need setting.
    pub fn from_config(config: &SlugConfig) -> Self {
        Self {
            separator: config.separator().to_string(),
            language: config.language().map(str::to_string),
            maximum_length: config.maximum_length(),
            generate_on_create: config.generate_on_create(),
            generate_on_update: config.generate_on_update(),
            require_unique: config.require_unique(),
            ..Self::default()
        }
    }

    pub fn generate_slugs_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = SlugSource::FieldList(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn generate_slugs_from_translatable(mut self, field: impl Into<String>) -> Self {
        self.source = SlugSource::Translatable(field.into());
        self
    }

    pub fn generate_slugs_from_fn<F>(mut self, source: F) -> Self
    where
        F: Fn(&dyn SluggableRecord) -> String + Send + Sync + 'static,
    {
        self.source = SlugSource::Computed(Arc::new(source));
        self
    }

    pub fn save_slugs_to(mut self, field: impl Into<String>) -> Self {
        self.slug_field = field.into();
        self
    }

    pub fn using_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn using_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn slugs_shouldnt_be_longer_than(mut self, maximum_length: usize) -> Self {
        self.maximum_length = maximum_length;
        self
    }

    pub fn do_not_generate_slugs_on_create(mut self) -> Self {
        self.generate_on_create = false;
        self
    }

    pub fn do_not_generate_slugs_on_update(mut self) -> Self {
        self.generate_on_update = false;
        self
    }

    pub fn allow_duplicate_slugs(mut self) -> Self {
        self.require_unique = false;
        self
    }

    /// Translatable sources write a per-language slug map into the slug field.
    pub fn is_translatable(&self) -> bool {
        matches!(self.source, SlugSource::Translatable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = SlugOptions::create();
        assert!(matches!(&options.source, SlugSource::FieldList(f) if f.is_empty()));
        assert!(options.slug_field.is_empty());
        assert_eq!(options.separator, "-");
        assert_eq!(options.language.as_deref(), Some("en"));
        assert_eq!(options.maximum_length, 250);
        assert!(options.generate_on_create);
        assert!(options.generate_on_update);
        assert!(options.require_unique);
    }

    #[test]
    fn builder_sets_every_attribute() {
        let options = SlugOptions::create()
            .generate_slugs_from(["first_name", "last_name"])
            .save_slugs_to("url")
            .using_separator("_")
            .using_language("de")
            .slugs_shouldnt_be_longer_than(20)
            .do_not_generate_slugs_on_create()
            .do_not_generate_slugs_on_update()
            .allow_duplicate_slugs();

        match &options.source {
            SlugSource::FieldList(fields) => assert_eq!(fields, &["first_name", "last_name"]),
            other => panic!("unexpected source {other:?}"),
        }
        assert_eq!(options.slug_field, "url");
        assert_eq!(options.separator, "_");
        assert_eq!(options.language.as_deref(), Some("de"));
        assert_eq!(options.maximum_length, 20);
        assert!(!options.generate_on_create);
        assert!(!options.generate_on_update);
        assert!(!options.require_unique);
        assert!(!options.is_translatable());
    }

    #[test]
    fn translatable_source_is_flagged() {
        let options = SlugOptions::create().generate_slugs_from_translatable("title");
        assert!(options.is_translatable());
        assert_eq!(format!("{:?}", options.source), "Translatable(\"title\")");
    }

    #[test]
    fn computed_source_debug_hides_closure() {
        let options = SlugOptions::create().generate_slugs_from_fn(|_| "x".into());
        assert_eq!(format!("{:?}", options.source), "Computed(<fn>)");
    }
}
