use sqlx::PgPool;

use crate::{error::Result, models::Review};

pub async fn find_by_product_id(pool: &PgPool, product_id: i32) -> Result<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE product_id = $1 ORDER BY created_at DESC",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

/// Appends a review. Earlier reviews are never overwritten; a user may leave
/// several reviews for the same product.
pub async fn create_review(
    pool: &PgPool,
    product_id: i32,
    rating: i32,
    comment: Option<&str>,
) -> Result<Review> {
    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (product_id, rating, comment)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(product_id)
    .bind(rating)
    .bind(comment)
    .fetch_one(pool)
    .await?;

    Ok(review)
}
