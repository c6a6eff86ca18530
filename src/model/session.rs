use serde::{Deserialize, Serialize};

use crate::client::session::Role;

/// Body of `POST /auth/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response, stored as the tab's session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}
