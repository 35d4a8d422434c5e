//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Quiz author authenticated with a Google account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Google account subject identifier.
    pub google_id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            google_id: entity.google_id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user after a successful Google login.
///
/// An existing user with the same `google_id` has its name and email refreshed.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub google_id: String,
    pub name: String,
    pub email: String,
}
