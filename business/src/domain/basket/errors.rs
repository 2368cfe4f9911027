use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.unauthenticated")]
    Unauthenticated,
    /// The store refused to persist the basket for this buyer.
    #[error("basket.not_found")]
    NotFound(UserId),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
