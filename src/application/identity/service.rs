//! User service — application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service. Every store
//! call runs under its own deadline; dropping the store future on expiry
//! cancels the in-flight operation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::oid::ObjectId;
use tracing::{info, warn};

use crate::domain::{
    validate_user, CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface,
};

/// Default per-operation deadline for store calls.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// User service — orchestrates the create/read/delete use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface + ?Sized> {
    repo: Arc<R>,
    operation_timeout: Duration,
}

impl<R: UserRepositoryInterface + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_timeout(repo, DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_timeout(repo: Arc<R>, operation_timeout: Duration) -> Self {
        Self {
            repo,
            operation_timeout,
        }
    }

    pub fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    /// Validate and insert a new user, returning its generated id.
    pub async fn create_user(&self, dto: CreateUserDto) -> DomainResult<ObjectId> {
        validate_user(&dto)?;

        let id = self.with_deadline(self.repo.create_user(dto)).await?;
        info!(user_id = %id, "User created");
        Ok(id)
    }

    pub async fn get_user_by_id(&self, id: &ObjectId) -> DomainResult<User> {
        self.with_deadline(self.repo.get_user_by_id(id))
            .await?
            .ok_or_else(|| DomainError::user_not_found(id.to_hex()))
    }

    pub async fn delete_user(&self, id: &ObjectId) -> DomainResult<()> {
        let deleted = self.with_deadline(self.repo.delete_user(id)).await?;
        if deleted == 0 {
            return Err(DomainError::user_not_found(id.to_hex()));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Store reachability check used by the health endpoint.
    pub async fn ping(&self) -> DomainResult<()> {
        self.with_deadline(self.repo.ping()).await
    }

    async fn with_deadline<T, F>(&self, op: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, op).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.operation_timeout, "Store operation deadline exceeded");
                Err(DomainError::Timeout(self.operation_timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryUserRepository;
    use async_trait::async_trait;

    struct SlowRepository;

    #[async_trait]
    impl UserRepositoryInterface for SlowRepository {
        async fn create_user(&self, _dto: CreateUserDto) -> DomainResult<ObjectId> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ObjectId::new())
        }

        async fn get_user_by_id(&self, _id: &ObjectId) -> DomainResult<Option<User>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }

        async fn delete_user(&self, _id: &ObjectId) -> DomainResult<u64> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(0)
        }

        async fn ping(&self) -> DomainResult<()> {
            Ok(())
        }
    }

    fn alice() -> CreateUserDto {
        CreateUserDto {
            name: "Alice".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));

        let id = service.create_user(alice()).await.unwrap();
        let user = service.get_user_by_id(&id).await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 30);
    }

    #[tokio::test]
    async fn invalid_user_never_reaches_store() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repo.clone());

        let err = service
            .create_user(CreateUserDto {
                name: String::new(),
                age: 30,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.operations(), 0);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let id = service.create_user(alice()).await.unwrap();

        service.delete_user(&id).await.unwrap();
        let err = service.delete_user(&id).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let err = service.get_user_by_id(&ObjectId::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    async fn slow_store_hits_deadline() {
        let timeout = Duration::from_millis(20);
        let service = UserService::with_timeout(Arc::new(SlowRepository), timeout);

        let err = service.get_user_by_id(&ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(t) if t == timeout));

        let err = service.create_user(alice()).await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(_)));

        let err = service.delete_user(&ObjectId::new()).await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(_)));
    }
}
