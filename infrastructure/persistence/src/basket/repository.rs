use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::basket::model::CustomerBasket;
use business::domain::basket::repository::BasketRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{BasketEntity, to_records};
use crate::db::map_sqlx_error;

/// Baskets kept as one JSONB row per buyer.
pub struct BasketRepositoryPostgres {
    pool: PgPool,
}

impl BasketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BasketRepository for BasketRepositoryPostgres {
    async fn get_basket(
        &self,
        buyer_id: &UserId,
    ) -> Result<Option<CustomerBasket>, RepositoryError> {
        let entity = sqlx::query_as::<_, BasketEntity>(
            "SELECT buyer_id, items FROM baskets WHERE buyer_id = $1",
        )
        .bind(buyer_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn update_basket(
        &self,
        basket: &CustomerBasket,
    ) -> Result<CustomerBasket, RepositoryError> {
        // RETURNING gives back the persisted row, not the request
        let entity = sqlx::query_as::<_, BasketEntity>(
            r#"INSERT INTO baskets (buyer_id, items, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (buyer_id) DO UPDATE SET
                items = EXCLUDED.items,
                updated_at = EXCLUDED.updated_at
            RETURNING buyer_id, items"#,
        )
        .bind(basket.buyer_id.as_str())
        .bind(Json(to_records(basket)))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match entity {
            Some(entity) => {
                tracing::info!(
                    "Basket item persisted successfully. BuyerId={}",
                    basket.buyer_id
                );
                Ok(entity.into_domain())
            }
            None => {
                tracing::warn!(
                    "Problem occurred persisting the basket. BuyerId={}",
                    basket.buyer_id
                );
                Err(RepositoryError::NotFound)
            }
        }
    }

    async fn delete_basket(&self, buyer_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM baskets WHERE buyer_id = $1")
            .bind(buyer_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
