//! Repository implementations using SeaORM

pub mod acronym_repository;
pub mod user_repository;

pub use acronym_repository::SeaOrmAcronymRepository;
pub use user_repository::SeaOrmUserRepository;
