use sqlx::PgPool;

use crate::{error::Result, models::Product};

/// Idempotent add: a second add of the same product is a no-op.
pub async fn add_item(pool: &PgPool, user_id: i32, product_id: i32) -> Result<()> {
    sqlx::query(
        "INSERT INTO wishlist_items (user_id, product_id)
         VALUES ($1, $2)
         ON CONFLICT (user_id, product_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(product_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn remove_item(pool: &PgPool, user_id: i32, product_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
        .bind(user_id)
        .bind(product_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_products(pool: &PgPool, user_id: i32) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT p.*,
                COALESCE(AVG(r.rating), 0)::float8 AS rating,
                COUNT(r.id)::bigint AS review_count
         FROM wishlist_items w
         JOIN products p ON p.id = w.product_id
         LEFT JOIN reviews r ON r.product_id = p.id
         WHERE w.user_id = $1
         GROUP BY p.id, w.created_at
         ORDER BY w.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}
