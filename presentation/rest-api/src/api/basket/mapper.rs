//! Translation between wire DTOs and the basket domain model.

use business::domain::basket::model::{BasketItem, CustomerBasket};

use super::dto::{BasketItemDto, CustomerBasketResponse, UpdateBasketRequest};

pub fn to_response(basket: &CustomerBasket) -> CustomerBasketResponse {
    CustomerBasketResponse {
        items: basket
            .items
            .iter()
            .map(|item| BasketItemDto {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            })
            .collect(),
    }
}

/// Request lines as domain items. The owner is attached by the use case
/// once the caller's identity is known.
pub fn to_domain_items(request: UpdateBasketRequest) -> Vec<BasketItem> {
    request
        .items
        .into_iter()
        .map(|item| BasketItem::new(item.product_id, item.quantity))
        .collect()
}
