pub mod acronym;
pub mod user;
