use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::auth::config::{
    generate_secret, AuthConfig, PasswordConfig, DEFAULT_BCRYPT_COST,
    DEFAULT_TOKEN_EXPIRY_MINUTES, MAX_BCRYPT_COST, MIN_BCRYPT_COST, MIN_SECRET_LEN,
};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GITHUB_REPO_URL: &str = "https://api.github.com/repos/nodejs/node";

/// One year; keeps expiry arithmetic far from overflow.
const MAX_TOKEN_EXPIRY_MINUTES: i64 = 525_600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("JWT_SECRET must be at least {min} bytes long")]
    WeakSecret { min: usize },

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCostOutOfRange(u32),

    #[error("TOKEN_EXPIRY_MINUTES must be between 1 and 525600, got {0}")]
    TokenExpiryOutOfRange(i64),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppEnvConfig {
    /// Bind host (HOST)
    pub host: String,
    /// Bind port (PORT)
    pub port: u16,
    /// Signing key, token window, bcrypt cost
    pub auth: AuthConfig,
    /// Repository endpoint polled by /external-data (GITHUB_REPO_URL)
    pub github_repo_url: String,
    /// Comma separated CORS allow list (CORS_ALLOW_ORIGIN); any origin when unset
    pub cors_allow_origin: Option<String>,
}

impl AppEnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests never touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // The secret is used verbatim; blank only means unset.
        let jwt_secret = match lookup("JWT_SECRET").filter(|v| !v.trim().is_empty()) {
            Some(secret) if secret.len() < MIN_SECRET_LEN => {
                return Err(ConfigError::WeakSecret { min: MIN_SECRET_LEN })
            }
            Some(secret) => secret,
            None => {
                warn!("JWT_SECRET not set; generated a random key, tokens will not survive a restart");
                generate_secret()
            }
        };

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange(bcrypt_cost));
        }

        let token_expiry_minutes =
            parse_or(&lookup, "TOKEN_EXPIRY_MINUTES", DEFAULT_TOKEN_EXPIRY_MINUTES)?;
        if !(1..=MAX_TOKEN_EXPIRY_MINUTES).contains(&token_expiry_minutes) {
            return Err(ConfigError::TokenExpiryOutOfRange(token_expiry_minutes));
        }

        Ok(Self {
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            auth: AuthConfig {
                jwt_secret,
                token_expiry_minutes,
                password: PasswordConfig { bcrypt_cost },
            },
            github_repo_url: non_empty(lookup("GITHUB_REPO_URL"))
                .unwrap_or_else(|| DEFAULT_GITHUB_REPO_URL.to_string()),
            cors_allow_origin: non_empty(lookup("CORS_ALLOW_ORIGIN")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}
