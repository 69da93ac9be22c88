use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in the `users` table. `password` holds whatever the active password
/// mode stored: a salted digest, or plaintext in legacy-compat mode.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub career_goal: Option<String>,
}

/// Registration payload and seed input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub career_goal: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User as it leaves the API. The password is only present in legacy-compat mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
    pub career_goal: Option<String>,
}

impl UserResponse {
    pub fn from_user(user: User, echo_password: bool) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password: echo_password.then_some(user.password),
            career_goal: user.career_goal,
        }
    }
}
