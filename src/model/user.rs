use serde::{Deserialize, Serialize};

use crate::client::session::Role;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    pub active: bool,
}

/// Body of `PUT /users/{id}/status`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserStatusDto {
    pub active: bool,
}

/// Body of `PUT /users/{id}/password`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PasswordResetDto {
    pub password: String,
}
