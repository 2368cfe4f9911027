use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteBasketParams {
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait DeleteBasketUseCase: Send + Sync {
    async fn execute(&self, params: DeleteBasketParams) -> Result<(), BasketError>;
}
