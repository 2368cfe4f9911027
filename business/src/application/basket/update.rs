use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::CustomerBasket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::update::{UpdateBasketParams, UpdateBasketUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBasketUseCase for UpdateBasketUseCaseImpl {
    async fn execute(&self, params: UpdateBasketParams) -> Result<CustomerBasket, BasketError> {
        let Some(user_id) = params.user_id else {
            self.logger
                .warn("UpdateBasket called without authenticated user");
            return Err(BasketError::Unauthenticated);
        };

        self.logger.info(&format!(
            "UpdateBasket request started. UserId={}, ItemCount={}",
            user_id,
            params.items.len()
        ));

        // Full overwrite: whatever was stored under this buyer is replaced
        let basket = CustomerBasket::new(user_id.clone(), params.items);

        let stored = self
            .repository
            .update_basket(&basket)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger.warn(&format!(
                        "UpdateBasket failed. Basket does not exist. UserId={}",
                        user_id
                    ));
                    BasketError::NotFound(user_id.clone())
                }
                other => {
                    self.logger.error(&format!(
                        "UpdateBasket failed. UserId={}, Error={}",
                        user_id, other
                    ));
                    BasketError::Repository(other)
                }
            })?;

        self.logger.info(&format!(
            "UpdateBasket completed successfully. UserId={}",
            user_id
        ));
        Ok(stored)
    }
}
