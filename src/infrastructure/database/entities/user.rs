//! User document stored in the `users` collection

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::{CreateUserDto, User};

/// Collection holding user documents
pub const COLLECTION_NAME: &str = "users";

/// User document model
///
/// `_id` is omitted on insert so the store assigns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
}

impl From<CreateUserDto> for Model {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            id: None,
            name: dto.name,
            age: dto.age,
        }
    }
}

impl Model {
    /// Convert into the domain entity; documents read back always carry `_id`.
    pub fn into_domain(self, fallback_id: ObjectId) -> User {
        User {
            id: self.id.unwrap_or(fallback_id),
            name: self.name,
            age: self.age,
        }
    }
}
