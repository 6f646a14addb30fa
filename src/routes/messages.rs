use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{InboxMessage, Message, SendMessageRequest},
    queries::{message_queries, user_queries},
    utils::jwt::Claims,
};

pub async fn get_messages(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<InboxMessage>>> {
    let user_id = claims.user_id()?;

    let messages = message_queries::list_for_user(&state.db, user_id).await?;

    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Message>> {
    let sender_id = claims.user_id()?;

    if payload.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Message content is required".to_string(),
        ));
    }

    if user_queries::find_by_id(&state.db, payload.receiver_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Receiver not found".to_string()));
    }

    let message = message_queries::create_message(&state.db, sender_id, &payload).await?;

    Ok(Json(message))
}

pub async fn mark_message_read(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let user_id = claims.user_id()?;

    if !message_queries::mark_read(&state.db, id, user_id).await? {
        return Err(AppError::NotFound("Message not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
