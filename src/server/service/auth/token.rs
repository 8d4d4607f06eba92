//! Signed bearer tokens.
//!
//! A token is `<hex claims json>.<hex HMAC-SHA256 signature>`. Claims carry the user
//! ID, email and role plus an expiry timestamp in seconds since the Unix epoch.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::User,
    },
};

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID.
    pub sub: i32,
    pub email: String,
    pub role: Role,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: i64,
}

/// Issues and verifies bearer tokens with a shared secret.
///
/// Cheap to clone; the secret is shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<Vec<u8>>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a new TokenService.
    ///
    /// # Arguments
    /// - `secret` - Signing secret
    /// - `ttl` - How long issued tokens stay valid
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: Arc::new(secret.into()),
            ttl,
        }
    }

    /// Issues a token for a user, valid for the configured TTL from now.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    ///
    /// # Returns
    /// - `Ok(String)` - The signed token
    /// - `Err(AppError::InternalError)` - Expiry falls outside the representable
    ///   date range, or encoding failed
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalError("Token expiry out of range".to_string()))?;

        let claims = TokenClaims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            exp: expires_at.timestamp(),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AppError::InternalError(format!("Failed to encode token claims: {}", e)))?;

        let mut mac = self
            .mac()
            .ok_or_else(|| AppError::InternalError("Failed to key token HMAC".to_string()))?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", hex::encode(payload), hex::encode(signature)))
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - Signature valid and token not expired
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered with, or expired
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(|| AuthError::InvalidToken("missing signature".to_string()))?;

        let payload = hex::decode(payload)
            .map_err(|_| AuthError::InvalidToken("payload is not hex".to_string()))?;
        let signature = hex::decode(signature)
            .map_err(|_| AuthError::InvalidToken("signature is not hex".to_string()))?;

        let mut mac = self
            .mac()
            .ok_or_else(|| AuthError::InvalidToken("unusable signing key".to_string()))?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken("bad signature".to_string()))?;

        let claims: TokenClaims = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::InvalidToken(format!("bad claims: {}", e)))?;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::InvalidToken("expired".to_string()));
        }

        Ok(claims)
    }

    fn mac(&self) -> Option<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret).ok()
    }
}
