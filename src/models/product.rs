use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currencies accepted by the storefront.
pub const CURRENCIES: [&str; 3] = ["MGA", "EUR", "USD"];

/// The fixed category catalog shown in the seller dashboard.
pub const CATEGORIES: [&str; 10] = [
    "Électronique",
    "Mode",
    "Alimentation",
    "Artisanat",
    "Textiles",
    "Beauté",
    "Épices",
    "Bijoux",
    "Décoration",
    "Autre",
];

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const MAX_PRODUCT_IMAGES: usize = 5;

/// A catalog row. `rating` and `review_count` are not stored columns; every
/// query that returns a product derives them from the live review set.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub seller: String,
    pub seller_id: Option<i32>,
    pub category: String,
    pub categories: Vec<String>,
    pub downloads: i32,
    pub rating: f64,
    pub review_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub price_from: Option<Decimal>,
    pub price_to: Option<Decimal>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub seller: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_currency() -> String {
    "MGA".to_string()
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub downloads: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct UploadImagesResponse {
    pub urls: Vec<String>,
}
