use std::fmt;

/// The single application-level error for the data access layer.
#[derive(Debug)]
pub enum DbError {
    Config(String),
    Database(String),
    UnexpectedData(String),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::Config(msg) => write!(f, "Configuration Error: {}", msg),
            DbError::Database(msg) => write!(f, "Database Error: {}", msg),
            DbError::UnexpectedData(msg) => write!(f, "Unexpected Data Error: {}", msg),
        }
    }
}

impl std::error::Error for DbError {}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_wrapped_message() {
        let err = DbError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "Database Error: connection refused");

        let err = DbError::UnexpectedData("no rows affected".to_string());
        assert_eq!(err.to_string(), "Unexpected Data Error: no rows affected");
    }

    #[test]
    fn sqlx_errors_convert_to_database_errors() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        match err {
            DbError::Database(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Database variant, got {:?}", other),
        }
    }
}
