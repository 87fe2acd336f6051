pub mod ata_pdf;
pub mod auth;
pub mod bootstrap;
pub mod bulk_import;
pub mod data_stores;
pub mod database;

pub use auth::*;
pub use bootstrap::*;
pub use data_stores::*;
pub use database::*;
