//! HTTP surface of the auth module

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::AuthBody;
pub use routes::create_auth_routes;
