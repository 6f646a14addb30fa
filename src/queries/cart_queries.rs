use sqlx::PgPool;

use crate::{error::Result, models::CartEntry};

/// Applies `delta` to the (user, product) cart row through an upsert on the
/// composite key. A resulting quantity of zero or below deletes the row, so a
/// zero-quantity row is never persisted. Returns the resulting quantity.
pub async fn upsert_cart_item(
    pool: &PgPool,
    user_id: i32,
    product_id: i32,
    delta: i32,
) -> Result<i32> {
    let mut tx = pool.begin().await?;

    let quantity: i32 = sqlx::query_scalar(
        "INSERT INTO cart_items (user_id, product_id, quantity)
         VALUES ($1, $2, $3)
         ON CONFLICT (user_id, product_id)
         DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                       updated_at = NOW()
         RETURNING quantity",
    )
    .bind(user_id)
    .bind(product_id)
    .bind(delta)
    .fetch_one(&mut *tx)
    .await?;

    if quantity <= 0 {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        return Ok(0);
    }

    tx.commit().await?;
    Ok(quantity)
}

pub async fn get_cart(pool: &PgPool, user_id: i32) -> Result<Vec<CartEntry>> {
    let entries = sqlx::query_as::<_, CartEntry>(
        "SELECT c.product_id, p.title, p.price, p.currency, p.image, c.quantity
         FROM cart_items c
         JOIN products p ON p.id = c.product_id
         WHERE c.user_id = $1
         ORDER BY c.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}
