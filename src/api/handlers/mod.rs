//! HTTP handlers for the non-auth routes

pub mod external_data;
pub mod health;
pub mod home;
pub mod system_info;

pub use external_data::external_data;
pub use health::health_check;
pub use home::home;
pub use system_info::system_info;
