use crate::domain::{Email, Leader, NewLeader, StoredLeader};

use super::StoreError;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn count_users(&self) -> Result<u64, StoreError>;
    async fn add_leader(&self, leader: NewLeader) -> Result<Leader, StoreError>;
    /// Looks up a user holding the leader role by email.
    async fn find_leader(&self, email: &Email) -> Result<StoredLeader, StoreError>;
}
