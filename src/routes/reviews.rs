use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateReviewRequest, Review},
    queries::{product_queries, review_queries},
};

pub async fn get_product_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Review>>> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let reviews = review_queries::find_by_product_id(&state.db, id).await?;

    Ok(Json(reviews))
}

pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<Review>> {
    validate_rating(payload.rating)?;

    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let comment = payload
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let review = review_queries::create_review(&state.db, id, payload.rating, comment).await?;

    Ok(Json(review))
}

fn validate_rating(rating: i32) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ratings_within_range() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
    }

    #[test]
    fn rejects_ratings_outside_range() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }
}
