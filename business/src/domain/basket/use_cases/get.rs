use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::CustomerBasket;
use crate::domain::shared::value_objects::UserId;

pub struct GetBasketParams {
    /// `None` for anonymous callers.
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait GetBasketUseCase: Send + Sync {
    async fn execute(&self, params: GetBasketParams)
    -> Result<Option<CustomerBasket>, BasketError>;
}
