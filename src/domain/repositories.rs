//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use super::{Acronym, AcronymField, DomainError, User, UserField};

/// Repository trait for Acronym entity
#[async_trait]
pub trait AcronymRepository: Send + Sync {
    /// Store a new acronym and return it with its assigned identifier
    async fn create(&self, acronym: Acronym) -> Result<Acronym, DomainError>;

    /// Find all acronyms
    async fn find_all(&self) -> Result<Vec<Acronym>, DomainError>;

    /// Find an acronym by ID, failing with `NotFound` if absent
    async fn find_by_id(&self, id: i32) -> Result<Acronym, DomainError>;

    /// Replace `short`, `long` and `userID` of an existing acronym
    async fn update(&self, id: i32, acronym: Acronym) -> Result<Acronym, DomainError>;

    /// Delete an acronym by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Acronyms whose `field` equals `value` exactly
    async fn filter_eq(&self, field: AcronymField, value: &str)
    -> Result<Vec<Acronym>, DomainError>;

    /// Acronyms matching either of two exact-match filters
    async fn filter_eq_any(
        &self,
        first: (AcronymField, &str),
        second: (AcronymField, &str),
    ) -> Result<Vec<Acronym>, DomainError>;

    /// First acronym in storage order, if any
    async fn first(&self) -> Result<Option<Acronym>, DomainError>;

    /// All acronyms ordered by `field`
    async fn sorted_by(
        &self,
        field: AcronymField,
        ascending: bool,
    ) -> Result<Vec<Acronym>, DomainError>;

    /// Resolve the user owning `acronym`
    async fn find_user(&self, acronym: &Acronym) -> Result<User, DomainError>;
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user and return it with its generated identifier
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID, failing with `NotFound` if absent
    async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError>;

    /// Replace `name` and `username` of an existing user
    async fn update(&self, id: Uuid, user: User) -> Result<User, DomainError>;

    /// Delete a user by ID.
    ///
    /// Fails with `Conflict` while the user still owns acronyms; nothing is
    /// cascaded or orphaned.
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;

    /// Users whose `field` equals `value` exactly
    async fn filter_eq(&self, field: UserField, value: &str) -> Result<Vec<User>, DomainError>;

    /// Users matching either of two exact-match filters
    async fn filter_eq_any(
        &self,
        first: (UserField, &str),
        second: (UserField, &str),
    ) -> Result<Vec<User>, DomainError>;

    /// First user in storage order, if any
    async fn first(&self) -> Result<Option<User>, DomainError>;

    /// All users ordered by `field`
    async fn sorted_by(&self, field: UserField, ascending: bool)
    -> Result<Vec<User>, DomainError>;

    /// Resolve all acronyms owned by `user`
    async fn find_acronyms(&self, user: &User) -> Result<Vec<Acronym>, DomainError>;
}
