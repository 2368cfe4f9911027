use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CustomerBasket;

/// Key-value store holding one basket per buyer.
#[async_trait]
pub trait BasketRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `buyer_id`.
    async fn get_basket(
        &self,
        buyer_id: &UserId,
    ) -> Result<Option<CustomerBasket>, RepositoryError>;

    /// Replaces the stored basket and returns what the store persisted.
    /// `RepositoryError::NotFound` means the store would not accept the write.
    async fn update_basket(
        &self,
        basket: &CustomerBasket,
    ) -> Result<CustomerBasket, RepositoryError>;

    /// Removing an absent basket is not an error.
    async fn delete_basket(&self, buyer_id: &UserId) -> Result<(), RepositoryError>;
}
