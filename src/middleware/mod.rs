use axum::{extract::Request, middleware::Next, response::Response};

use crate::{error::AppError, utils::jwt};

/// Requires a bearer token on the request and exposes the verified claims to
/// handlers as a request extension.
pub async fn auth_middleware(mut req: Request, next: Next) -> Result<Response, AppError> {
    let token = bearer_token(&req)?;
    let claims = jwt::verify_token(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<&str, AppError> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
}
