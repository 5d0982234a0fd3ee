//! User storage
//!
//! `UserStorage` is the seam the auth service talks to; `MemoryStorage` is
//! the process-local implementation.

pub mod r#trait;
pub mod memory;

pub use r#trait::UserStorage;
pub use memory::MemoryStorage;
