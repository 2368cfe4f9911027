use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::basket::model::CustomerBasket;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Process-local basket store. Updates overwrite the whole basket.
#[derive(Debug, Default)]
pub struct InMemoryBasketRepository {
    baskets: RwLock<HashMap<UserId, CustomerBasket>>,
}

impl InMemoryBasketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.baskets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.baskets.read().await.is_empty()
    }
}

#[async_trait]
impl BasketRepository for InMemoryBasketRepository {
    async fn get_basket(
        &self,
        buyer_id: &UserId,
    ) -> Result<Option<CustomerBasket>, RepositoryError> {
        Ok(self.baskets.read().await.get(buyer_id).cloned())
    }

    async fn update_basket(
        &self,
        basket: &CustomerBasket,
    ) -> Result<CustomerBasket, RepositoryError> {
        self.baskets
            .write()
            .await
            .insert(basket.buyer_id.clone(), basket.clone());

        Ok(basket.clone())
    }

    async fn delete_basket(&self, buyer_id: &UserId) -> Result<(), RepositoryError> {
        self.baskets.write().await.remove(buyer_id);
        Ok(())
    }
}
