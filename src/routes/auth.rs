use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AuthResponse, LoginRequest, RegisterRequest},
    queries::user_queries,
    utils::jwt,
};

const MIN_PASSWORD_LEN: usize = 8;

pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>> {
    let email = payload.email.trim().to_lowercase();
    let name = payload.name.trim();

    validate_registration(&email, name, &payload.password)?;

    if user_queries::find_by_email(&state.db, &email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    let user = user_queries::create_user(&state.db, &email, name, &password_hash).await?;

    tracing::info!("User {} registered", user.id);

    Ok(Json(AuthResponse {
        token: jwt::generate_token(user.id, &user.email)?,
    }))
}

pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let email = payload.email.trim().to_lowercase();

    let Some(user) = user_queries::find_by_email(&state.db, &email).await? else {
        return Err(invalid_credentials());
    };

    let stored_hash = user.password.as_deref().ok_or_else(invalid_credentials)?;

    let matches = bcrypt::verify(&payload.password, stored_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !matches {
        return Err(invalid_credentials());
    }

    Ok(Json(AuthResponse {
        token: jwt::generate_token(user.id, &user.email)?,
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid email or password".to_string())
}

fn validate_registration(email: &str, name: &str, password: &str) -> Result<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    if name.is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".to_string()));
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_registration() {
        assert!(validate_registration("vendeur@tsena.mg", "Hery", "s3cret-pass").is_ok());
    }

    #[test]
    fn rejects_bad_email() {
        assert!(validate_registration("not-an-email", "Hery", "s3cret-pass").is_err());
        assert!(validate_registration("", "Hery", "s3cret-pass").is_err());
    }

    #[test]
    fn rejects_blank_name() {
        assert!(validate_registration("a@b.c", "", "s3cret-pass").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_registration("a@b.c", "Hery", "short").is_err());
    }
}
