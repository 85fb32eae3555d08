use anyhow::Result;
use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::models::User;
use crate::common::ApiError;

/// Session tokens are valid for exactly one hour from issuance.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub id: String,   // User identifier
    pub role: String, // Role at issuance, re-checked by the guard
    pub exp: i64,     // Expiration timestamp
    pub iat: i64,     // Issued at timestamp
    #[serde(default)]
    pub jti: String, // JWT ID (unique token identifier), absent on older tokens
}

/// Why a token was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::ExpiredToken,
            TokenError::Invalid => ApiError::InvalidToken,
        }
    }
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create new JWT service with secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a new JWT token for a user
    ///
    /// Token expires after one hour
    pub fn create_token(&self, user: &User) -> Result<String> {
        self.create_token_issued_at(user, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn create_token_issued_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String> {
        let iat = issued_at.timestamp();

        let claims = Claims {
            id: user.id.clone(),
            role: user.role.to_string(),
            exp: iat + TOKEN_TTL_SECONDS,
            iat,
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if the signature is valid and the token has not expired.
    pub fn verify_token(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        self.verify_token_at(token, Utc::now())
    }

    /// Verify a token as of `now`
    ///
    /// A token is expired from its `exp` second onwards.
    pub fn verify_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        // Expiry is judged against `now` below
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}
