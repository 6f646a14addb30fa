use aws_sdk_s3::Client as S3Client;
use axum::{Router, extract::DefaultBodyLimit, http::Method};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::{
    config::{AppConfig, StorageConfig},
    database,
    error::Result,
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub storage: StorageConfig,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let s3 = crate::config::load_s3_client().await?;

    let state = AppState {
        db: pool,
        s3,
        storage: config.storage.clone(),
    };

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(config.cors.origin_headers()?);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
