use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::basket::model::{BasketItem, CustomerBasket};
use business::domain::shared::value_objects::UserId;

/// JSON shape of one line in the `items` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItemRecord {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, FromRow)]
pub struct BasketEntity {
    pub buyer_id: String,
    pub items: Json<Vec<BasketItemRecord>>,
}

impl BasketEntity {
    pub fn into_domain(self) -> CustomerBasket {
        let items = self
            .items
            .0
            .into_iter()
            .map(|record| BasketItem::new(record.product_id, record.quantity))
            .collect();

        CustomerBasket::new(UserId::new(self.buyer_id), items)
    }
}

pub fn to_records(basket: &CustomerBasket) -> Vec<BasketItemRecord> {
    basket
        .items
        .iter()
        .map(|item| BasketItemRecord {
            product_id: item.product_id.clone(),
            quantity: item.quantity,
        })
        .collect()
}
