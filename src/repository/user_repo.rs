use crate::model::now_timestamp;
use crate::model::user::AdminUser;
use crate::repository::mongo::ADMIN_USERS;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn insert(&self, user: AdminUser) -> RepositoryResult<AdminUser>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<AdminUser>>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<AdminUser>>;
}

pub struct MongoAdminUserRepository {
    collection: Collection<AdminUser>,
}

impl MongoAdminUserRepository {
    pub fn new(db: &Database) -> Self {
        MongoAdminUserRepository { collection: db.collection::<AdminUser>(ADMIN_USERS) }
    }
}

#[async_trait]
impl AdminUserRepository for MongoAdminUserRepository {
    async fn insert(&self, mut user: AdminUser) -> RepositoryResult<AdminUser> {
        user.id = Some(ObjectId::new());
        user.email = user.email.to_lowercase();
        let now = now_timestamp();
        user.created_at = Some(now.clone());
        user.updated_at = Some(now);
        self.collection.insert_one(&user, None).await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<AdminUser>> {
        let filter = doc! { "email": email.to_lowercase() };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<AdminUser>> {
        let filter = doc! { "_id": *id };
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by id: {}", e)))
    }
}
