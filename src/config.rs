// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::slug::options::{DEFAULT_LANGUAGE, DEFAULT_MAXIMUM_LENGTH, DEFAULT_SEPARATOR};

#[derive(Clone, Debug)]
pub struct SlugConfig {
    separator: String,
    language: Option<String>,
    maximum_length: usize,
    generate_on_create: bool,
    generate_on_update: bool,
    require_unique: bool,
    save_attempts: u32,
    // Postgres-backed existence check
    database_url: Option<String>,
    table: String,
    key_column: String,
    slug_column: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_save_attempts() -> u32 {
    3
}

fn default_table() -> String {
    "records".into()
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.into(),
            language: Some(DEFAULT_LANGUAGE.into()),
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_on_create: true,
            generate_on_update: true,
            require_unique: true,
            save_attempts: default_save_attempts(),
            database_url: None,
            table: default_table(),
            key_column: "id".into(),
            slug_column: "slug".into(),
        }
    }
}

fn parse_flag(name: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(ConfigError::Invalid(format!("{name} must be true/false, got {v:?}"))),
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{name} must be a non-negative integer, got {v:?}"))),
    }
}

impl SlugConfig {
    /// Build configuration from the process environment. Callers load any
    /// `.env` file beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to defaults; malformed values are rejected. A zero maximum length is
    /// accepted here and reported when a slug is generated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let separator = lookup("SLUG_SEPARATOR").unwrap_or(defaults.separator);
        let language = match lookup("SLUG_LANGUAGE") {
            Some(lang) if lang.trim().is_empty() => None,
            Some(lang) => Some(lang.trim().to_string()),
            None => defaults.language,
        };

        let maximum_length =
            parse_number("SLUG_MAX_LENGTH", lookup("SLUG_MAX_LENGTH"), defaults.maximum_length)?;
        let save_attempts =
            parse_number("SLUG_SAVE_ATTEMPTS", lookup("SLUG_SAVE_ATTEMPTS"), defaults.save_attempts)?;
        if save_attempts == 0 {
            return Err(ConfigError::Invalid("SLUG_SAVE_ATTEMPTS must be at least 1".into()));
        }

        let generate_on_create = parse_flag(
            "SLUG_GENERATE_ON_CREATE",
            lookup("SLUG_GENERATE_ON_CREATE"),
            defaults.generate_on_create,
        )?;
        let generate_on_update = parse_flag(
            "SLUG_GENERATE_ON_UPDATE",
            lookup("SLUG_GENERATE_ON_UPDATE"),
            defaults.generate_on_update,
        )?;
        let require_unique = parse_flag(
            "SLUG_REQUIRE_UNIQUE",
            lookup("SLUG_REQUIRE_UNIQUE"),
            defaults.require_unique,
        )?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let table = lookup("SLUG_TABLE").unwrap_or(defaults.table);
        let key_column = lookup("SLUG_KEY_COLUMN").unwrap_or(defaults.key_column);
        let slug_column = lookup("SLUG_COLUMN").unwrap_or(defaults.slug_column);

        Ok(Self {
            separator,
            language,
            maximum_length,
            generate_on_create,
            generate_on_update,
            require_unique,
            save_attempts,
            database_url,
            table,
            key_column,
            slug_column,
        })
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn maximum_length(&self) -> usize {
        self.maximum_length
    }

    pub fn generate_on_create(&self) -> bool {
        self.generate_on_create
    }

    pub fn generate_on_update(&self) -> bool {
        self.generate_on_update
    }

    pub fn require_unique(&self) -> bool {
        self.require_unique
    }

    pub fn save_attempts(&self) -> u32 {
        self.save_attempts
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn slug_column(&self) -> &str {
        &self.slug_column
    }
}
