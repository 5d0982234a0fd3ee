//! Auth configuration

use rand::{distributions::Alphanumeric, Rng};

/// bcrypt cost used when none is configured
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt accepts costs in this range
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Access token lifetime used when none is configured
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Shortest signing secret accepted from configuration
pub const MIN_SECRET_LEN: usize = 32;

const GENERATED_SECRET_LEN: usize = 64;

/// Auth configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime (minutes)
    pub token_expiry_minutes: i64,

    /// Password hashing configuration
    pub password: PasswordConfig,
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// bcrypt cost
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Defaults around an explicit signing secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_expiry_minutes: DEFAULT_TOKEN_EXPIRY_MINUTES,
            password: PasswordConfig::default(),
        }
    }

    /// Defaults around a random secret that only lives as long as the process.
    pub fn ephemeral() -> Self {
        Self::with_secret(generate_secret())
    }
}

// Keep the secret out of logs and panic messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_expiry_minutes", &self.token_expiry_minutes)
            .field("password", &self.password)
            .finish()
    }
}

/// Random alphanumeric signing secret.
pub fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::ephemeral();
        assert_eq!(config.token_expiry_minutes, 60);
        assert_eq!(config.password.bcrypt_cost, 10);
        assert_eq!(config.jwt_secret.len(), GENERATED_SECRET_LEN);
    }

    #[test]
    fn test_generated_secrets_differ() {
        assert_ne!(generate_secret(), generate_secret());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::with_secret("a-very-long-signing-key-that-should-stay-hidden");
        let printed = format!("{config:?}");
        assert!(!printed.contains("should-stay-hidden"));
        assert!(printed.contains("REDACTED"));
    }
}
