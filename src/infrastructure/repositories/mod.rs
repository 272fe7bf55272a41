// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_slug;

pub use error::map_sqlx;
pub use memory::InMemorySlugStore;
pub use postgres_slug::PostgresSlugExistence;
