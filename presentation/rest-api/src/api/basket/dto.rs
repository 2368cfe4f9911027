use poem_openapi::Object;

/// One product line as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Object)]
#[oai(rename_all = "camelCase")]
pub struct BasketItemDto {
    /// Product identifier
    pub product_id: String,
    /// Number of units (at least one)
    #[oai(validator(minimum(value = "1")))]
    pub quantity: u32,
}

/// Replaces the caller's basket with these items
#[derive(Debug, Clone, Object)]
pub struct UpdateBasketRequest {
    pub items: Vec<BasketItemDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Object)]
pub struct CustomerBasketResponse {
    pub items: Vec<BasketItemDto>,
}
