use crate::dto::pagination::PageParams;
use crate::model::now_timestamp;
use crate::model::service_offering::ServiceOffering;
use crate::repository::mongo::{find_page, set_document, SERVICES};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Default)]
pub struct OfferingFilter {
    pub active: Option<bool>,
}

impl OfferingFilter {
    pub fn to_document(&self) -> Document {
        match self.active {
            Some(active) => doc! { "active": active },
            None => Document::new(),
        }
    }

    pub fn matches(&self, offering: &ServiceOffering) -> bool {
        self.active.map_or(true, |a| offering.active == a)
    }
}

#[async_trait]
pub trait OfferingRepository: Send + Sync {
    async fn create(&self, offering: ServiceOffering) -> RepositoryResult<ServiceOffering>;
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ServiceOffering>>;
    async fn update(&self, offering: ServiceOffering) -> RepositoryResult<ServiceOffering>;
    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()>;
    /// Ordered by `sortOrder`, newest first within the same order
    async fn list(&self, filter: &OfferingFilter, page: PageParams) -> RepositoryResult<(Vec<ServiceOffering>, u64)>;
}

pub struct MongoOfferingRepository {
    collection: Collection<ServiceOffering>,
}

impl MongoOfferingRepository {
    pub fn new(db: &Database) -> Self {
        MongoOfferingRepository { collection: db.collection::<ServiceOffering>(SERVICES) }
    }
}

#[async_trait]
impl OfferingRepository for MongoOfferingRepository {
    #[instrument(skip(self, offering), fields(slug = %offering.slug))]
    async fn create(&self, mut offering: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        info!("Creating new service offering");
        offering.id = Some(ObjectId::new());
        let now = now_timestamp();
        offering.created_at = Some(now.clone());
        offering.updated_at = Some(now);

        self.collection.insert_one(&offering, None).await.map_err(|e| {
            error!("Failed to create service offering: {}", e);
            RepositoryError::from(e)
        })?;
        Ok(offering)
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ServiceOffering>> {
        Ok(self.collection.find_one(doc! { "slug": slug }, None).await?)
    }

    #[instrument(skip(self, offering), fields(slug = %offering.slug))]
    async fn update(&self, mut offering: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        let id = offering
            .id
            .ok_or_else(|| RepositoryError::validation("Service offering has no id"))?;
        offering.updated_at = Some(now_timestamp());

        let result = self
            .collection
            .update_one(doc! { "_id": id }, set_document(&offering)?, None)
            .await?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!("No service offering found for ID: {}", id)));
        }
        Ok(offering)
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()> {
        let result = self.collection.delete_one(doc! { "slug": slug }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("Service not found: {}", slug)));
        }
        info!("Service offering deleted: {}", slug);
        Ok(())
    }

    #[instrument(skip(self), fields(page = page.page, limit = page.limit))]
    async fn list(&self, filter: &OfferingFilter, page: PageParams) -> RepositoryResult<(Vec<ServiceOffering>, u64)> {
        find_page(
            &self.collection,
            filter.to_document(),
            doc! { "sortOrder": 1, "createdAt": -1 },
            page,
        )
        .await
    }
}
