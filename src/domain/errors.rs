// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Configuration errors raised by the slug guard before any derivation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSlugOption {
    #[error("could not determine which fields should be sluggified")]
    MissingSourceFields,
    #[error("could not determine in which field the slug should be saved")]
    MissingSlugField,
    #[error("maximum length should be greater than zero")]
    InvalidMaximumLength,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid slug option: {0}")]
    InvalidOption(#[from] InvalidSlugOption),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
