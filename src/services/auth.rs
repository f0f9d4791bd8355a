//! Administrator authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::UserClaims,
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check the administrator credential and return a JWT token
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        if username != self.config.admin_username || !self.verify_password(password)? {
            tracing::warn!("Rejected login attempt for '{}'", username);
            return Err(AppError::Authentication("Invalid login or password".to_string()));
        }

        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: self.config.admin_username.clone(),
            exp: now + (self.config.jwt_expiration_hours as i64 * 3600),
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Validate a bearer token
    pub fn authenticate(&self, token: &str) -> AppResult<UserClaims> {
        UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))
    }

    pub fn token_lifetime_secs(&self) -> i64 {
        self.config.jwt_expiration_hours as i64 * 3600
    }

    fn verify_password(&self, password: &str) -> AppResult<bool> {
        if self.config.admin_password_hash.is_empty() {
            tracing::warn!("auth.admin_password_hash is not configured; logins are disabled");
            return Ok(false);
        }
        let parsed_hash = PasswordHash::new(&self.config.admin_password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
