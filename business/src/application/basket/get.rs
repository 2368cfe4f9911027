use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::CustomerBasket;
use crate::domain::basket::repository::BasketRepository;
use crate::domain::basket::use_cases::get::{GetBasketParams, GetBasketUseCase};
use crate::domain::logger::Logger;

pub struct GetBasketUseCaseImpl {
    pub repository: Arc<dyn BasketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetBasketUseCase for GetBasketUseCaseImpl {
    async fn execute(
        &self,
        params: GetBasketParams,
    ) -> Result<Option<CustomerBasket>, BasketError> {
        // Anonymous browsing sees an empty basket, not an error
        let Some(user_id) = params.user_id else {
            self.logger
                .warn("GetBasket called without authenticated user");
            return Ok(None);
        };

        self.logger
            .info(&format!("GetBasket request started. UserId={}", user_id));
        self.logger.debug(&format!(
            "Fetching basket from repository. UserId={}",
            user_id
        ));

        let basket = self.repository.get_basket(&user_id).await.map_err(|e| {
            self.logger.error(&format!(
                "GetBasket failed. UserId={}, Error={}",
                user_id, e
            ));
            BasketError::Repository(e)
        })?;

        match &basket {
            Some(found) => self.logger.info(&format!(
                "GetBasket completed successfully. UserId={}, ItemCount={}",
                user_id,
                found.item_count()
            )),
            None => self.logger.info(&format!(
                "GetBasket completed. Basket not found. UserId={}",
                user_id
            )),
        }

        Ok(basket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::basket::model::BasketItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub BasketRepo {}

        #[async_trait]
        impl BasketRepository for BasketRepo {
            async fn get_basket(&self, buyer_id: &UserId) -> Result<Option<CustomerBasket>, RepositoryError>;
            async fn update_basket(&self, basket: &CustomerBasket) -> Result<CustomerBasket, RepositoryError>;
            async fn delete_basket(&self, buyer_id: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_stored_basket_for_owner() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_basket()
            .withf(|buyer_id| buyer_id.as_str() == "alice")
            .times(1)
            .returning(|buyer_id| {
                Ok(Some(CustomerBasket::new(
                    buyer_id.clone(),
                    vec![BasketItem::new("sku-1", 2), BasketItem::new("sku-2", 1)],
                )))
            });

        let use_case = GetBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBasketParams {
                user_id: Some(UserId::new("alice")),
            })
            .await;

        let basket = result.unwrap().unwrap();
        assert_eq!(basket.items.len(), 2);
        assert_eq!(basket.items[0], BasketItem::new("sku-1", 2));
    }

    #[tokio::test]
    async fn should_return_none_when_basket_absent() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_get_basket().returning(|_| Ok(None));

        let use_case = GetBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBasketParams {
                user_id: Some(UserId::new("alice")),
            })
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_none_without_touching_store_when_anonymous() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo.expect_get_basket().never();

        let use_case = GetBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetBasketParams { user_id: None }).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockBasketRepo::new();
        mock_repo
            .expect_get_basket()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = GetBasketUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetBasketParams {
                user_id: Some(UserId::new("alice")),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            BasketError::Repository(RepositoryError::Unavailable)
        ));
    }
}
