use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::Product,
    queries::{product_queries, wishlist_queries},
    utils::jwt::Claims,
};

pub async fn get_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Product>>> {
    let user_id = claims.user_id()?;

    let products = wishlist_queries::list_products(&state.db, user_id).await?;

    Ok(Json(products))
}

pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i32>,
) -> Result<StatusCode> {
    let user_id = claims.user_id()?;

    if product_queries::find_by_id(&state.db, product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    wishlist_queries::add_item(&state.db, user_id, product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(product_id): Path<i32>,
) -> Result<StatusCode> {
    let user_id = claims.user_id()?;

    if !wishlist_queries::remove_item(&state.db, user_id, product_id).await? {
        return Err(AppError::NotFound("Product not in wishlist".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
