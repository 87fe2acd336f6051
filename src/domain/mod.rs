pub mod ata;
pub mod ata_request;
pub mod checkin_request;
pub mod data_stores;
pub mod email;
pub mod login_request;
pub mod member;
pub mod member_request;
pub mod models;
pub mod password;
pub mod timestamp;
mod user;

pub use ata::*;
pub use ata_request::*;
pub use checkin_request::*;
pub use data_stores::*;
pub use email::*;
pub use login_request::*;
pub use member::*;
pub use member_request::*;
pub use models::*;
pub use password::*;
pub use timestamp::*;
pub use user::*;
