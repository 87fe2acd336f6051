pub mod ata_store;
pub mod member_store;
pub mod store_err;
pub mod user_store;

pub use ata_store::AtaStore;
pub use member_store::MemberStore;
pub use store_err::StoreError;
pub use user_store::UserStore;
