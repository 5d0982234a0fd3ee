//! Access token service

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::errors::AuthError;

/// JWT claim set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// HS256 token issuer and verifier
pub struct TokenService {
    secret: zeroize::Zeroizing<String>,
    expiry: Duration,
}

impl TokenService {
    /// `secret` is validated by configuration loading; this only stores it.
    pub fn new(secret: &str, expiry_minutes: i64) -> Self {
        Self {
            secret: zeroize::Zeroizing::new(secret.to_string()),
            expiry: Duration::minutes(expiry_minutes),
        }
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Sign a token for `subject` expiring one window from now.
    pub fn issue(&self, subject: Uuid) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: Uuid, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Decode a token, rejecting bad signatures and anything past `exp`.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AuthError::TokenInvalid)
    }
}
