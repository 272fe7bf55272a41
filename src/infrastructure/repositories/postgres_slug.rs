// src/infrastructure/repositories/postgres_slug.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugExistenceRepository, SlugLookup};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// Existence check against a Postgres table. Translatable slug columns are
/// expected to be `json`/`jsonb` objects keyed by language tag.
///
/// The query targets the table directly, so views or row-level filters that
/// hide soft-deleted rows must not be used as `table`.
#[derive(Clone)]
pub struct PostgresSlugExistence {
    pool: PgPool,
    table: String,
}

impl PostgresSlugExistence {
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

/// Quote an identifier, keeping `schema.table` qualification.
fn quote_ident(ident: &str) -> String {
    ident
        .split('.')
        .map(|part| format!("\"{}\"", part.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(".")
}

fn lookup_query(table: &str, lookup: &SlugLookup) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT EXISTS (SELECT 1 FROM ");
    builder.push(quote_ident(table));
    builder.push(" WHERE ");
    builder.push(quote_ident(&lookup.slug_field));

    if let Some(language) = &lookup.language {
        builder.push(" ->> ");
        builder.push_bind(language.clone());
    }

    builder.push(" = ");
    builder.push_bind(lookup.candidate.clone());

    // Keys are compared as text so integer, uuid and text key columns share one query.
    match &lookup.exclude_key {
        Some(key) => {
            builder.push(" AND CAST(");
            builder.push(quote_ident(&lookup.key_name));
            builder.push(" AS TEXT) <> ");
            builder.push_bind(key.to_string());
        }
        None => {
            builder.push(" AND ");
            builder.push(quote_ident(&lookup.key_name));
            builder.push(" IS NOT NULL");
        }
    }

    builder.push(")");
    builder
}

#[async_trait]
impl SlugExistenceRepository for PostgresSlugExistence {
    async fn other_record_has_slug(&self, lookup: &SlugLookup) -> DomainResult<bool> {
        let mut builder = lookup_query(&self.table, lookup);
        let exists = builder
            .build_query_scalar::<bool>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(exists)
    }
}
