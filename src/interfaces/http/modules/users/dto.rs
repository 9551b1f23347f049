//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateUserDto, User};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// 24-character hex ObjectId
    pub id: String,
    pub name: String,
    pub age: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_hex(),
            name: u.name,
            age: u.age,
        }
    }
}

/// Create user request
///
/// Absent or `null` fields default to empty/zero so they are reported by
/// validation rather than as malformed JSON.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name.unwrap_or_default(),
            age: r.age.unwrap_or_default(),
        }
    }
}

/// `{"success": true, "user": {...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserDto,
}

impl UserResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

/// `{"success": true, "data": "<id>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub success: bool,
    /// Generated user id
    pub data: String,
}

impl CreatedUserResponse {
    pub fn new(id: String) -> Self {
        Self { success: true, data: id }
    }
}
