use std::env;

use axum::http::HeaderValue;

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub assets_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parsed_var("PORT", 3000)?,
                max_body_size: parsed_var("MAX_BODY_SIZE", 10 * 1024 * 1024)?,
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", 20)?,
            },
            cors: CorsConfig {
                allowed_origins: required_var("CORS_ORIGINS")?
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            },
            storage: StorageConfig {
                bucket: required_var("S3_BUCKET")?,
                assets_url: required_var("ASSETS_URL")?
                    .trim_end_matches('/')
                    .to_string(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl CorsConfig {
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse()
                    .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
            })
            .collect()
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::ConfigError(format!("{} not set", name)))
}

fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name))),
        Err(_) => Ok(default),
    }
}
