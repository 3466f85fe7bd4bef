use crate::dto::pagination::PageParams;
use crate::model::booking::{BookingRequest, BookingStatus};
use crate::model::now_timestamp;
use crate::repository::mongo::{find_page, BOOKINGS};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: BookingRequest) -> RepositoryResult<BookingRequest>;
    async fn update_status(&self, id: ObjectId, status: BookingStatus) -> RepositoryResult<BookingRequest>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, status: Option<BookingStatus>, page: PageParams) -> RepositoryResult<(Vec<BookingRequest>, u64)>;
}

pub struct MongoBookingRepository {
    collection: Collection<BookingRequest>,
}

impl MongoBookingRepository {
    pub fn new(db: &Database) -> Self {
        MongoBookingRepository { collection: db.collection::<BookingRequest>(BOOKINGS) }
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    #[instrument(skip(self, booking), fields(model = %booking.product_model))]
    async fn create(&self, mut booking: BookingRequest) -> RepositoryResult<BookingRequest> {
        info!("Storing new booking request");
        booking.id = Some(ObjectId::new());
        let now = now_timestamp();
        booking.created_at = Some(now.clone());
        booking.updated_at = Some(now);

        self.collection.insert_one(&booking, None).await.map_err(|e| {
            error!("Failed to create booking: {}", e);
            RepositoryError::database(format!("Failed to create booking: {}", e))
        })?;
        Ok(booking)
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: ObjectId, status: BookingStatus) -> RepositoryResult<BookingRequest> {
        let update = doc! { "$set": { "status": status.as_str(), "updatedAt": now_timestamp() } };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        self.collection
            .find_one_and_update(doc! { "_id": id }, update, options)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Booking not found for ID: {}", id)))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("Booking not found for ID: {}", id)));
        }
        info!("Booking deleted: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(page = page.page, limit = page.limit))]
    async fn list(&self, status: Option<BookingStatus>, page: PageParams) -> RepositoryResult<(Vec<BookingRequest>, u64)> {
        let filter = match status {
            Some(s) => doc! { "status": s.as_str() },
            None => Document::new(),
        };
        find_page(&self.collection, filter, doc! { "createdAt": -1 }, page).await
    }
}
