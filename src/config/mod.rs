//! Environment-driven process configuration

pub mod env_config;

pub use env_config::{AppEnvConfig, ConfigError};
