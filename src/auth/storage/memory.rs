//! In-memory storage (volatile, lost on restart)

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use super::r#trait::UserStorage;
use crate::auth::types::UserRecord;

/// In-memory user store
///
/// One mutex guards the whole ordered list. It is never held across an
/// `.await`, so a blocking lock is fine inside async handlers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: Mutex<Vec<UserRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.lock().is_empty()
    }
}

#[async_trait]
impl UserStorage for MemoryStorage {
    async fn append(&self, record: UserRecord) {
        let mut users = self.users.lock();
        debug!(id = %record.id, position = users.len(), "user appended to memory store");
        users.push(record);
    }

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .iter()
            .find(|user| user.email == email)
            .cloned()
    }

    async fn list_all(&self) -> Vec<UserRecord> {
        self.users.lock().clone()
    }
}
