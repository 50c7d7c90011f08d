use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-generated identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique (case-insensitive) handle
    pub username: String,
    /// Unique (case-insensitive) email address
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(id: Uuid, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            username: input.username,
            email: input.email,
            created_at: Utc::now(),
        }
    }
}

/// DTO for creating a new user.
///
/// The validation rules apply at the HTTP boundary only; the store itself
/// accepts any strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(email, length(max = 255))]
    pub email: String,
}

impl CreateUser {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }
}
