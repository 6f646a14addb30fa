use axum::{Extension, Json, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CartEntry, CartMutationRequest, CartQuantityResponse},
    queries::{cart_queries, product_queries},
    utils::jwt::Claims,
};

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<CartEntry>>> {
    let user_id = claims.user_id()?;

    let entries = cart_queries::get_cart(&state.db, user_id).await?;

    Ok(Json(entries))
}

pub async fn mutate_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CartMutationRequest>,
) -> Result<Json<CartQuantityResponse>> {
    let user_id = claims.user_id()?;

    if payload.delta == 0 {
        return Err(AppError::BadRequest(
            "Quantity change must not be zero".to_string(),
        ));
    }

    if product_queries::find_by_id(&state.db, payload.product_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let quantity =
        cart_queries::upsert_cart_item(&state.db, user_id, payload.product_id, payload.delta)
            .await?;

    Ok(Json(CartQuantityResponse {
        product_id: payload.product_id,
        quantity,
    }))
}
