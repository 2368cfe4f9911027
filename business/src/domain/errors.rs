/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
    /// Transient failure: the store timed out, closed, or dropped the connection.
    #[error("repository.unavailable")]
    Unavailable,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, RepositoryError::Unavailable)
    }
}
