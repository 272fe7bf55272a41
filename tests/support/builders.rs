// tests/support/builders.rs
use once_cell::sync::Lazy;
use sluggable::domain::slug::{SlugOptions, Translations};
use sluggable::infrastructure::record::MapRecord;

/// English and French titles used by the translatable scenarios.
pub static BILINGUAL_TITLE: Lazy<Translations> = Lazy::new(|| {
    translations(&[("en", "Hello World"), ("fr", "Bonjour Monde")])
});

pub fn translations(pairs: &[(&str, &str)]) -> Translations {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn post_options() -> SlugOptions {
    SlugOptions::create()
        .generate_slugs_from(["title"])
        .save_slugs_to("slug")
        .using_separator("-")
        .slugs_shouldnt_be_longer_than(50)
}

pub fn translatable_options() -> SlugOptions {
    SlugOptions::create()
        .generate_slugs_from_translatable("title")
        .save_slugs_to("slug")
}

pub struct PostBuilder {
    options: SlugOptions,
    title: Option<String>,
    key: Option<i64>,
    slug: Option<String>,
    persisted: bool,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            options: post_options(),
            title: Some("My Post".into()),
            key: None,
            slug: None,
            persisted: false,
        }
    }

    pub fn options(mut self, options: SlugOptions) -> Self {
        self.options = options;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn key(mut self, key: i64) -> Self {
        self.key = Some(key);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Snapshot the fields as already stored.
    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }

    pub fn build(self) -> MapRecord {
        let mut record = MapRecord::new(self.options);
        if let Some(title) = self.title {
            record = record.with_field("title", title);
        }
        if let Some(slug) = self.slug {
            record = record.with_field("slug", slug);
        }
        if let Some(key) = self.key {
            record = record.with_key(key);
        }
        if self.persisted {
            record = record.persisted();
        }
        record
    }
}
