use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        CATEGORIES, CURRENCIES, CreateProductRequest, MAX_PRODUCT_IMAGES, Product, ProductQuery,
        UpdateProductRequest,
    },
    queries::product_queries,
    services::media_service,
    utils::jwt::Claims,
};

pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let products = product_queries::search_products(&state.db, params).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<Product>> {
    let user_id = claims.user_id()?;

    validate_new_product(&payload)?;

    let product = product_queries::create_product(&state.db, user_id, &payload).await?;

    tracing::info!("Product {} created by user {}", product.id, user_id);

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Extension(_claims): Extension<Claims>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    validate_product_update(&payload)?;

    let product = product_queries::update_product(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Extension(_claims): Extension<Claims>,
) -> Result<StatusCode> {
    let images = product_queries::delete_product(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    // best effort: a storage failure leaves an orphaned object, not a failed delete
    for url in &images {
        let Some(key) = media_service::object_key_from_url(&state.storage.assets_url, url) else {
            continue;
        };

        if let Err(e) = media_service::delete_object(&state.s3, &state.storage.bucket, key).await {
            tracing::warn!("Failed to delete stored image {}: {}", key, e);
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn validate_new_product(payload: &CreateProductRequest) -> Result<()> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Product title is required".to_string()));
    }

    if payload.price <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Price must be greater than zero".to_string(),
        ));
    }

    validate_currency(&payload.currency)?;

    if payload.seller.trim().is_empty() {
        return Err(AppError::BadRequest("Seller name is required".to_string()));
    }

    validate_categories(&payload.categories)?;

    if payload.images.len() > MAX_PRODUCT_IMAGES {
        return Err(AppError::BadRequest(format!(
            "A maximum of {} images is allowed",
            MAX_PRODUCT_IMAGES
        )));
    }

    Ok(())
}

fn validate_product_update(payload: &UpdateProductRequest) -> Result<()> {
    if let Some(ref title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Product title is required".to_string()));
        }
    }

    if let Some(price) = payload.price {
        if price <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Price must be greater than zero".to_string(),
            ));
        }
    }

    if let Some(ref currency) = payload.currency {
        validate_currency(currency)?;
    }

    if let Some(ref categories) = payload.categories {
        validate_categories(categories)?;
    }

    if let Some(ref images) = payload.images {
        if images.len() > MAX_PRODUCT_IMAGES {
            return Err(AppError::BadRequest(format!(
                "A maximum of {} images is allowed",
                MAX_PRODUCT_IMAGES
            )));
        }
    }

    Ok(())
}

fn validate_currency(currency: &str) -> Result<()> {
    if !CURRENCIES.contains(&currency) {
        return Err(AppError::BadRequest(format!(
            "Unsupported currency: {}",
            currency
        )));
    }
    Ok(())
}

fn validate_categories(categories: &[String]) -> Result<()> {
    if categories.is_empty() {
        return Err(AppError::BadRequest(
            "At least one category must be selected".to_string(),
        ));
    }

    for category in categories {
        if !CATEGORIES.contains(&category.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown category: {}",
                category
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateProductRequest {
        CreateProductRequest {
            title: "Riz Makalioka Premium".to_string(),
            description: Some("Riz parfumé de la région d'Alaotra".to_string()),
            price: Decimal::from(50_000),
            currency: "MGA".to_string(),
            seller: "Boutique Hery".to_string(),
            categories: vec!["Alimentation".to_string()],
            images: vec![],
        }
    }

    #[test]
    fn accepts_a_valid_product() {
        assert!(validate_new_product(&valid_request()).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let mut req = valid_request();
        req.title = "   ".to_string();
        assert!(validate_new_product(&req).is_err());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut req = valid_request();
        req.price = Decimal::ZERO;
        assert!(validate_new_product(&req).is_err());

        req.price = Decimal::from(-5);
        assert!(validate_new_product(&req).is_err());
    }

    #[test]
    fn rejects_unknown_currency() {
        let mut req = valid_request();
        req.currency = "GBP".to_string();
        assert!(validate_new_product(&req).is_err());
    }

    #[test]
    fn requires_at_least_one_known_category() {
        let mut req = valid_request();
        req.categories = vec![];
        assert!(validate_new_product(&req).is_err());

        req.categories = vec!["Voitures".to_string()];
        assert!(validate_new_product(&req).is_err());
    }

    #[test]
    fn rejects_more_than_five_images() {
        let mut req = valid_request();
        req.images = (0..6).map(|i| format!("https://assets/p{}.jpg", i)).collect();
        assert!(validate_new_product(&req).is_err());
    }

    #[test]
    fn partial_update_only_checks_provided_fields() {
        let update = UpdateProductRequest {
            title: None,
            description: Some("Nouvelle description".to_string()),
            price: None,
            currency: None,
            image: None,
            images: None,
            categories: None,
            downloads: None,
        };
        assert!(validate_product_update(&update).is_ok());

        let bad_price = UpdateProductRequest {
            price: Some(Decimal::ZERO),
            ..update
        };
        assert!(validate_product_update(&bad_price).is_err());
    }
}
