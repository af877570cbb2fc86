//! Entity records shared by the gateway and the HTTP layer.
//!
//! A record with `id: None` is new and has not been stored yet. The store
//! assigns the identifier on create and it never changes afterwards.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::DomainError;

/// A user owning zero or more acronyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Option<Uuid>,
    #[schema(example = "Luke")]
    pub name: String,
    #[schema(example = "lukes")]
    pub username: String,
}

impl User {
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            username: username.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_text("username", &self.username)
    }
}

/// An acronym and its expansion, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Acronym {
    pub id: Option<i32>,
    #[schema(example = "OMG")]
    pub short: String,
    #[schema(example = "Oh My God")]
    pub long: String,
    #[serde(rename = "userID")]
    pub user_id: Uuid,
}

impl Acronym {
    pub fn new(short: impl Into<String>, long: impl Into<String>, user_id: Uuid) -> Self {
        Self {
            id: None,
            short: short.into(),
            long: long.into(),
            user_id,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("short", &self.short)?;
        require_text("long", &self.long)
    }
}

/// Text columns of an acronym usable in equality filters and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcronymField {
    Short,
    Long,
}

/// Text columns of a user usable in equality filters and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Username,
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("`{}` must not be empty", field)));
    }
    Ok(())
}
