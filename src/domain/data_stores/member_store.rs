use crate::domain::{Location, Member, NewMember};

use super::StoreError;

#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    async fn count_members(&self) -> Result<u64, StoreError>;
    async fn add_member(&self, member: NewMember) -> Result<Member, StoreError>;
    /// Inserts every member in one transaction; either all rows land or none.
    async fn add_members(&self, members: Vec<NewMember>) -> Result<usize, StoreError>;
    async fn get_member(&self, id: i64) -> Result<Member, StoreError>;
    /// Whole roster ordered by name.
    async fn list_members(&self) -> Result<Vec<Member>, StoreError>;
    async fn list_present(&self) -> Result<Vec<Member>, StoreError>;
    async fn delete_member(&self, id: i64) -> Result<(), StoreError>;
    /// Marks the first member matching (nome, grupo) exactly as present.
    async fn self_check_in(
        &self,
        nome: &str,
        grupo: &str,
        location: Option<Location>,
    ) -> Result<Member, StoreError>;
    /// Sets presence by id; the check-in time is stamped only when present.
    async fn set_presence(&self, id: i64, presente: bool) -> Result<Member, StoreError>;
}
