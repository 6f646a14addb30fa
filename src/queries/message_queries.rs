use sqlx::PgPool;

use crate::{
    error::Result,
    models::{InboxMessage, Message, SendMessageRequest},
};

pub async fn list_for_user(pool: &PgPool, user_id: i32) -> Result<Vec<InboxMessage>> {
    let messages = sqlx::query_as::<_, InboxMessage>(
        "SELECT m.*, p.title AS product_title
         FROM messages m
         LEFT JOIN products p ON p.id = m.product_id
         WHERE m.receiver_id = $1 OR m.sender_id = $1
         ORDER BY m.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

pub async fn create_message(
    pool: &PgPool,
    sender_id: i32,
    req: &SendMessageRequest,
) -> Result<Message> {
    let message = sqlx::query_as::<_, Message>(
        "INSERT INTO messages (sender_id, receiver_id, product_id, subject, content)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(sender_id)
    .bind(req.receiver_id)
    .bind(req.product_id)
    .bind(req.subject.as_deref())
    .bind(req.content.trim())
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// Marks a message read for its receiver. The transition is one-way and
/// idempotent: marking an already-read message leaves it read. Returns false
/// when no message with that id is addressed to the user.
pub async fn mark_read(pool: &PgPool, message_id: i32, receiver_id: i32) -> Result<bool> {
    let updated: Option<i32> = sqlx::query_scalar(
        "UPDATE messages SET is_read = TRUE
         WHERE id = $1 AND receiver_id = $2
         RETURNING id",
    )
    .bind(message_id)
    .bind(receiver_id)
    .fetch_optional(pool)
    .await?;

    Ok(updated.is_some())
}
