use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{CreateUserDto, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Insert a validated user, returning the store-assigned identifier.
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<ObjectId>;

    async fn get_user_by_id(&self, id: &ObjectId) -> DomainResult<Option<User>>;

    /// Returns the number of deleted records (0 or 1).
    async fn delete_user(&self, id: &ObjectId) -> DomainResult<u64>;

    /// Round-trip to the store to confirm it is reachable.
    async fn ping(&self) -> DomainResult<()>;
}
