pub(crate) mod ata;
pub(crate) mod checkin;
pub(crate) mod import;
pub(crate) mod index;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod members;
pub(crate) mod painel;
