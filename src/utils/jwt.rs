use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

const TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

impl Claims {
    /// The authenticated user id carried in `sub`.
    pub fn user_id(&self) -> Result<i32> {
        self.sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))
    }
}

fn secret() -> Result<String> {
    std::env::var("JWT_SECRET")
        .map_err(|_| AppError::ConfigError("JWT_SECRET not set".to_string()))
}

pub fn generate_token(user_id: i32, email: &str) -> Result<String> {
    let expires_at = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::days(TOKEN_TTL_DAYS))
        .ok_or_else(|| AppError::InternalError("Failed to calculate expiration".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expires_at.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret()?.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token generation failed: {}", e)))
}

pub fn verify_token(token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret()?.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_claims() {
        std::env::set_var("JWT_SECRET", "test-secret");

        let token = generate_token(42, "seller@example.com").unwrap();
        let claims = verify_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "seller@example.com");
        assert_eq!(claims.user_id().unwrap(), 42);
    }

    #[test]
    fn garbage_token_is_rejected() {
        std::env::set_var("JWT_SECRET", "test-secret");

        assert!(verify_token("not-a-token").is_err());
    }

    #[test]
    fn non_numeric_subject_has_no_user_id() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "a@b.c".to_string(),
            exp: 0,
        };

        assert!(claims.user_id().is_err());
    }
}
