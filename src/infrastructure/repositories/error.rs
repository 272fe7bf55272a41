use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => map_database_error(
            db_err.code().as_deref(),
            db_err.constraint(),
            db_err.message(),
        ),
        sqlx::Error::PoolTimedOut => DomainError::Persistence("database pool timed out".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_database_error(code: Option<&str>, constraint: Option<&str>, message: &str) -> DomainError {
    match code {
        Some("23505") => {
            let detail = constraint
                .map(|c| format!("slug already exists ({c})"))
                .unwrap_or_else(|| "unique constraint violated".into());
            DomainError::Conflict(detail)
        }
        _ => DomainError::Persistence(message.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_become_persistence() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(msg) if msg == "database pool timed out"
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn unique_violation_becomes_conflict() {
        assert!(matches!(
            map_database_error(Some("23505"), Some("records_slug_key"), "duplicate key"),
            DomainError::Conflict(msg) if msg == "slug already exists (records_slug_key)"
        ));
        assert!(matches!(
            map_database_error(Some("23505"), None, "duplicate key"),
            DomainError::Conflict(msg) if msg == "unique constraint violated"
        ));
    }

    #[test]
    fn missing_table_or_column_is_a_persistence_failure() {
        for code in ["42P01", "42703"] {
            assert!(matches!(
                map_database_error(Some(code), None, "relation \"records\" does not exist"),
                DomainError::Persistence(msg) if msg == "relation \"records\" does not exist"
            ));
        }
    }
}
