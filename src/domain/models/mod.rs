pub mod ata;
pub mod member;
pub mod user;

pub use ata::AtaModel;
pub use member::MemberModel;
pub use user::UserModel;
