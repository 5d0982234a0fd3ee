// src/api/mod.rs

pub mod csp_middleware; // Security response headers
pub mod external_data;  // GitHub + random fan-out
pub mod handlers;
pub mod manifest;       // Declared dependency list
pub mod middleware;     // CORS
pub mod server;
pub mod server_config;  // Server configuration constants

pub use server::{AppServer, AppState};
