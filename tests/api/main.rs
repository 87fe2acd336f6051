mod ata;
mod checkin;
mod import;
mod members;
