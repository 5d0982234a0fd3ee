//! User registration and login service with a few diagnostic endpoints.
//!
//! - [`auth`]: email/password accounts, bcrypt hashing, HS256 tokens
//! - [`api`]: router, middleware and the non-auth handlers
//! - [`config`]: environment configuration

pub mod api;
pub mod auth;
pub mod config;
