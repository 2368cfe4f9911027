use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::delete::{DeleteBasketParams, DeleteBasketUseCase};
use crate::domain::logger::Logger;

pub struct DeleteBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteBasketUseCase for DeleteBasketUseCaseImpl {
    async fn execute(&self, params: DeleteBasketParams) -> Result<(), BasketError> {
        let Some(user_id) = params.user_id else {
            self.logger
                .warn("DeleteBasket called without authenticated user");
            return Err(BasketError::Unauthenticated);
        };

        self.logger
            .info(&format!("DeleteBasket request started. UserId={}", user_id));

        self.repository.delete_basket(&user_id).await.map_err(|e| {
            self.logger.error(&format!(
                "DeleteBasket failed. UserId={}, Error={}",
                user_id, e
            ));
            BasketError::Repository(e)
        })?;

        self.logger.info(&format!(
            "DeleteBasket completed successfully. UserId={}",
            user_id
        ));
        Ok(())
    }
}
