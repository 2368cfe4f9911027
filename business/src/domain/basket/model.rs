use crate::domain::shared::value_objects::UserId;

/// A single product line inside a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    pub product_id: String,
    pub quantity: u32,
}

impl BasketItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// The basket stored under a buyer's identity.
///
/// A basket has no lifetime of its own: it only exists as the value kept
/// under `buyer_id` in the store, and an update replaces the whole item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerBasket {
    pub buyer_id: UserId,
    pub items: Vec<BasketItem>,
}

impl CustomerBasket {
    pub fn new(buyer_id: UserId, items: Vec<BasketItem>) -> Self {
        Self { buyer_id, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
