use crate::model::category::{Category, CategoryType};
use crate::model::now_timestamp;
use crate::repository::mongo::{set_document, CATEGORIES};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: Category) -> RepositoryResult<Category>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
    async fn update(&self, category: Category) -> RepositoryResult<Category>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    /// All categories, optionally of one type, sorted by name
    async fn list(&self, category_type: Option<CategoryType>) -> RepositoryResult<Vec<Category>>;
}

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        MongoCategoryRepository { collection: db.collection::<Category>(CATEGORIES) }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self, category), fields(slug = %category.slug))]
    async fn create(&self, mut category: Category) -> RepositoryResult<Category> {
        category.id = Some(ObjectId::new());
        let now = now_timestamp();
        category.created_at = Some(now.clone());
        category.updated_at = Some(now);

        self.collection.insert_one(&category, None).await.map_err(|e| {
            error!("Failed to create category: {}", e);
            RepositoryError::from(e)
        })?;
        info!("Category created");
        Ok(category)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        Ok(self.collection.find_one(doc! { "slug": slug }, None).await?)
    }

    #[instrument(skip(self, category), fields(slug = %category.slug))]
    async fn update(&self, mut category: Category) -> RepositoryResult<Category> {
        let id = category
            .id
            .ok_or_else(|| RepositoryError::validation("Category has no id"))?;
        category.updated_at = Some(now_timestamp());

        let result = self
            .collection
            .update_one(doc! { "_id": id }, set_document(&category)?, None)
            .await?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No category found for ID: {}", id)));
        }
        Ok(category)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No category found for ID: {}", id)));
        }
        info!("Category deleted: {}", id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, category_type: Option<CategoryType>) -> RepositoryResult<Vec<Category>> {
        let filter = match category_type {
            Some(t) => doc! { "type": t.as_str() },
            None => Document::new(),
        };
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        Ok(self.collection.find(filter, options).await?.try_collect().await?)
    }
}
