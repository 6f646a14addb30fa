use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::{Client as S3Client, config::Credentials};

use crate::error::{AppError, Result};

/// Builds the object-storage client from env credentials. An optional
/// S3_ENDPOINT points at an S3-compatible service (MinIO, Cloudflare R2)
/// and switches to path-style addressing.
pub async fn load_s3_client() -> Result<S3Client> {
    let access_key = std::env::var("AWS_ACCESS_KEY_ID")
        .map_err(|_| AppError::ConfigError("AWS_ACCESS_KEY_ID not set".to_string()))?;

    let secret_key = std::env::var("AWS_SECRET_ACCESS_KEY")
        .map_err(|_| AppError::ConfigError("AWS_SECRET_ACCESS_KEY not set".to_string()))?;

    let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    let credentials = Credentials::new(access_key, secret_key, None, None, "env-credentials");

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region))
        .credentials_provider(credentials)
        .load()
        .await;

    let s3_client = match std::env::var("S3_ENDPOINT") {
        Ok(endpoint) => {
            let s3_config = aws_sdk_s3::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .force_path_style(true)
                .build();
            S3Client::from_conf(s3_config)
        }
        Err(_) => S3Client::new(&config),
    };

    tracing::info!("Object storage client initialized");

    Ok(s3_client)
}
