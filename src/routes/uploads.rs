use axum::{Extension, Json, extract::Multipart, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{MAX_PRODUCT_IMAGES, UploadImagesResponse},
    services::media_service,
    utils::jwt::Claims,
};

/// Accepts up to five image parts and stores each under a random name that
/// keeps the original extension. An individual failure skips that image and
/// the rest proceed; the response carries the URLs that made it.
pub async fn upload_product_images(
    State(state): State<AppState>,
    Extension(_claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<UploadImagesResponse>> {
    let mut pending: Vec<(String, String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        let key = media_service::generate_object_key(field.file_name());
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read image data: {}", e)))?;

        pending.push((key, content_type, data.to_vec()));

        if pending.len() > MAX_PRODUCT_IMAGES {
            return Err(AppError::BadRequest(format!(
                "A maximum of {} images is allowed",
                MAX_PRODUCT_IMAGES
            )));
        }
    }

    if pending.is_empty() {
        return Err(AppError::BadRequest("No images provided".to_string()));
    }

    let mut urls = Vec::with_capacity(pending.len());

    for (key, content_type, data) in pending {
        match media_service::put_object(&state.s3, &state.storage.bucket, &key, &content_type, data)
            .await
        {
            Ok(()) => urls.push(media_service::public_url(&state.storage.assets_url, &key)),
            Err(e) => tracing::warn!("Image upload failed for {}: {}", key, e),
        }
    }

    Ok(Json(UploadImagesResponse { urls }))
}
