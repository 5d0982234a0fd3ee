//! User authentication module
//!
//! ## Layout
//!
//! ```text
//! auth/
//! ├── types.rs          # records, request/response bodies
//! ├── errors.rs         # AuthError + HTTP mapping
//! ├── config.rs         # AuthConfig / PasswordConfig
//! ├── validators.rs     # email syntax check
//! ├── service.rs        # AuthService (facade)
//! ├── core/
//! │   ├── password_service.rs
//! │   └── token_service.rs
//! ├── storage/
//! │   ├── trait.rs
//! │   └── memory.rs
//! └── api/
//!     ├── routes.rs
//!     └── handlers.rs
//! ```
//!
//! Requests flow API → service → storage; the service owns no state of its
//! own beyond the shared store handle.

pub mod api;
pub mod config;
pub mod core;
pub mod errors;
pub mod service;
pub mod storage;
pub mod types;
pub mod validators;

pub use api::create_auth_routes;
pub use config::AuthConfig;
pub use errors::AuthError;
pub use service::AuthService;
pub use storage::{MemoryStorage, UserStorage};
pub use types::{AuthOutcome, AuthResponse, LoginRequest, PublicUser, RegisterRequest, UserRecord};
