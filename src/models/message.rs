use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub product_id: Option<i32>,
    pub subject: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: i32,
    pub product_id: Option<i32>,
    pub subject: Option<String>,
    pub content: String,
}

/// An inbox row: the message plus the linked product's title, when any.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct InboxMessage {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub product_id: Option<i32>,
    pub subject: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub product_title: Option<String>,
}
