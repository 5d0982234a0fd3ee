//! Storage trait

use async_trait::async_trait;

use crate::auth::types::UserRecord;

/// User store
///
/// Append-only: records are never updated or removed, and email uniqueness
/// is not enforced.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Add a record at the end of the collection.
    async fn append(&self, record: UserRecord);

    /// First record with this email, in insertion order.
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    /// Snapshot of every record, in insertion order.
    async fn list_all(&self) -> Vec<UserRecord>;
}
