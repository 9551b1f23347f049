use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use tracing::error;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, User, UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;
use crate::infrastructure::database::DATABASE_NAME;

pub struct UserRepository {
    client: Client,
    collection: Collection<user::Model>,
    max_time: Duration,
}

impl UserRepository {
    /// `max_time` is forwarded to the server as `maxTimeMS` on reads.
    pub fn new(client: Client, max_time: Duration) -> Self {
        let collection = client
            .database(DATABASE_NAME)
            .collection::<user::Model>(user::COLLECTION_NAME);
        Self {
            client,
            collection,
            max_time,
        }
    }
}

fn db_err(e: mongodb::error::Error) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create_user(&self, dto: CreateUserDto) -> DomainResult<ObjectId> {
        let result = self
            .collection
            .insert_one(user::Model::from(dto))
            .await
            .map_err(db_err)?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            error!(inserted_id = ?result.inserted_id, "Store returned a non-ObjectId _id");
            DomainError::Storage("inserted document has no ObjectId".to_string())
        })
    }

    async fn get_user_by_id(&self, id: &ObjectId) -> DomainResult<Option<User>> {
        let found = self
            .collection
            .find_one(doc! { "_id": *id })
            .max_time(self.max_time)
            .await
            .map_err(db_err)?;

        Ok(found.map(|model| model.into_domain(*id)))
    }

    async fn delete_user(&self, id: &ObjectId) -> DomainResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(db_err)?;

        Ok(result.deleted_count)
    }

    async fn ping(&self) -> DomainResult<()> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
