use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{BasketItem, CustomerBasket};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateBasketParams {
    pub user_id: Option<UserId>,
    pub items: Vec<BasketItem>,
}

#[async_trait]
pub trait UpdateBasketUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBasketParams) -> Result<CustomerBasket, BasketError>;
}
