use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CartMutationRequest {
    pub product_id: i32,
    pub delta: i32,
}

#[derive(Debug, Serialize)]
pub struct CartQuantityResponse {
    pub product_id: i32,
    pub quantity: i32,
}

/// A cart row joined with the product fields the cart page renders.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CartEntry {
    pub product_id: i32,
    pub title: String,
    pub price: Decimal,
    pub currency: String,
    pub image: Option<String>,
    pub quantity: i32,
}
