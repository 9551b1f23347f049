//! In-memory user storage

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

use crate::domain::{CreateUserDto, DomainResult, User, UserRepositoryInterface};

/// In-memory storage for development and testing
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<ObjectId, User>,
    operations: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls served so far (pings excluded).
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn record(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepositoryInterface for InMemoryUserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<ObjectId> {
        self.record();
        let id = ObjectId::new();
        self.users.insert(
            id,
            User {
                id,
                name: dto.name,
                age: dto.age,
            },
        );
        Ok(id)
    }

    async fn get_user_by_id(&self, id: &ObjectId) -> DomainResult<Option<User>> {
        self.record();
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn delete_user(&self, id: &ObjectId) -> DomainResult<u64> {
        self.record();
        Ok(self.users.remove(id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
