//! Unique, human-readable slugs for persisted records.
//!
//! [`SlugService`](domain::slug::SlugService) derives a slug from a record's
//! configured source fields, honours manually set slugs and resolves
//! collisions against a [`SlugExistenceRepository`](domain::slug::SlugExistenceRepository).
//! [`SluggedSaveService`](application::commands::SluggedSaveService) drives it
//! from a record's create/update sequence.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
