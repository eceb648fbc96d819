use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Account email address
    pub email: String,
    /// Password (at least 8 characters)
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// Successful registration or login: the bearer token plus the account
/// it authenticates.
#[derive(Debug, Clone, Object)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}
