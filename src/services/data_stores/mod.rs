pub mod sql_ata_store;
pub mod sql_member_store;
pub mod sql_user_store;

pub use sql_ata_store::SqlAtaStore;
pub use sql_member_store::SqlMemberStore;
pub use sql_user_store::SqlUserStore;
