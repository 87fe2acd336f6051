use crate::domain::{Ata, NewAta};

use super::StoreError;

#[async_trait::async_trait]
pub trait AtaStore: Send + Sync {
    /// Resolves the selected members and freezes them into the attendee snapshot.
    async fn create_ata(&self, ata: NewAta) -> Result<Ata, StoreError>;
    async fn get_ata(&self, id: i64) -> Result<Ata, StoreError>;
    /// Active or archived atas, newest meeting first.
    async fn list_atas(&self, archived: bool) -> Result<Vec<Ata>, StoreError>;
    async fn archive_ata(&self, id: i64) -> Result<Ata, StoreError>;
}
