//! Password hashing service

use crate::auth::{config::PasswordConfig, errors::AuthError};

/// Password hashing service (bcrypt)
#[derive(Debug, Clone)]
pub struct PasswordService {
    config: PasswordConfig,
}

impl PasswordService {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    pub fn cost(&self) -> u32 {
        self.config.bcrypt_cost
    }

    /// Salted bcrypt digest of `password` at the configured cost.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.config.bcrypt_cost)
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    /// Check `password` against a stored digest.
    ///
    /// Returns `Ok(false)` on mismatch; errors only when the digest itself
    /// cannot be parsed.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, hash).map_err(|e| AuthError::HashingError(e.to_string()))
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(PasswordConfig::default())
    }
}
