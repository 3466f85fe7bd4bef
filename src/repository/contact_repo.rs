use crate::dto::pagination::PageParams;
use crate::model::contact::{Contact, ContactStatus};
use crate::model::now_timestamp;
use crate::repository::mongo::{find_page, CONTACTS};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, contact: Contact) -> RepositoryResult<Contact>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Contact>;
    async fn update_status(&self, id: ObjectId, status: ContactStatus) -> RepositoryResult<Contact>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, status: Option<ContactStatus>, page: PageParams) -> RepositoryResult<(Vec<Contact>, u64)>;
}

pub struct MongoContactRepository {
    collection: Collection<Contact>,
}

impl MongoContactRepository {
    pub fn new(db: &Database) -> Self {
        MongoContactRepository { collection: db.collection::<Contact>(CONTACTS) }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    #[instrument(skip(self, contact), fields(email = %contact.email))]
    async fn create(&self, mut contact: Contact) -> RepositoryResult<Contact> {
        info!("Storing new contact lead");
        contact.id = Some(ObjectId::new());
        let now = now_timestamp();
        contact.created_at = Some(now.clone());
        contact.updated_at = Some(now);

        match self.collection.insert_one(&contact, None).await {
            Ok(_) => Ok(contact),
            Err(e) => {
                error!("Failed to create contact: {}", e);
                Err(RepositoryError::database(format!("Failed to create contact: {}", e)))
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Contact> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(contact)) => Ok(contact),
            Ok(None) => Err(RepositoryError::not_found(format!("Contact not found for ID: {}", id))),
            Err(e) => {
                error!("Failed to fetch contact by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch contact by ID: {}", e)))
            }
        }
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: ObjectId, status: ContactStatus) -> RepositoryResult<Contact> {
        let update = doc! { "$set": { "status": status.as_str(), "updatedAt": now_timestamp() } };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        match self.collection.find_one_and_update(doc! { "_id": id }, update, options).await? {
            Some(contact) => {
                info!("Contact status updated");
                Ok(contact)
            }
            None => Err(RepositoryError::not_found(format!("Contact not found for ID: {}", id))),
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("Contact not found for ID: {}", id)));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(page = page.page, limit = page.limit))]
    async fn list(&self, status: Option<ContactStatus>, page: PageParams) -> RepositoryResult<(Vec<Contact>, u64)> {
        let filter = match status {
            Some(s) => doc! { "status": s.as_str() },
            None => Document::new(),
        };
        find_page(&self.collection, filter, doc! { "createdAt": -1 }, page).await
    }
}
