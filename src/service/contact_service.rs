use crate::dto::contact_dto::CreateContactRequest;
use crate::dto::pagination::{PageParams, Paginated};
use crate::dto::parse_enum;
use crate::model::contact::{Contact, ContactStatus};
use crate::repository::contact_repo::ContactRepository;
use crate::service::notification::Notifier;
use crate::util::email::NotificationBody;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{info, instrument};

#[async_trait]
pub trait ContactService: Send + Sync {
    /// Store a lead from the public form and notify the business
    async fn submit_contact(&self, request: CreateContactRequest) -> Result<Contact, ServiceError>;
    async fn get_contact(&self, id: ObjectId) -> Result<Contact, ServiceError>;
    async fn update_contact_status(&self, id: ObjectId, status: ContactStatus) -> Result<Contact, ServiceError>;
    async fn delete_contact(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_contacts(&self, status: Option<ContactStatus>, page: PageParams) -> Result<Paginated<Contact>, ServiceError>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub notifier: Arc<Notifier>,
}

impl ContactServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>, notifier: Arc<Notifier>) -> Self {
        Self { contact_repo, notifier }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_contact(&self, request: CreateContactRequest) -> Result<Contact, ServiceError> {
        let contact = Contact {
            id: None,
            name: request.name.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            phone: request.phone,
            company: request.company,
            project_type: request.project_type,
            budget: parse_enum(&request.budget)?,
            timeline: parse_enum(&request.timeline)?,
            message: request.message,
            status: ContactStatus::New,
            created_at: None,
            updated_at: None,
        };
        let created = self.contact_repo.create(contact).await?;
        info!("Contact lead stored");

        let body = NotificationBody {
            heading: "New contact request",
            rows: vec![
                ("Name", created.name.clone()),
                ("Email", created.email.clone()),
                ("Phone", created.phone.clone().unwrap_or_else(|| "-".to_string())),
                ("Company", created.company.clone().unwrap_or_else(|| "-".to_string())),
                ("Project type", created.project_type.clone()),
                ("Budget", created.budget.to_string()),
                ("Timeline", created.timeline.to_string()),
                ("Message", created.message.clone()),
            ],
        };
        let subject = format!("New lead from {}", created.name);
        self.notifier.notify(&subject, body, Some(&created.email)).await;

        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_contact(&self, id: ObjectId) -> Result<Contact, ServiceError> {
        Ok(self.contact_repo.get_by_id(id).await?)
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_contact_status(&self, id: ObjectId, status: ContactStatus) -> Result<Contact, ServiceError> {
        Ok(self.contact_repo.update_status(id, status).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_contact(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.contact_repo.delete(id).await?)
    }

    #[instrument(skip(self))]
    async fn list_contacts(&self, status: Option<ContactStatus>, page: PageParams) -> Result<Paginated<Contact>, ServiceError> {
        let (items, total) = self.contact_repo.list(status, page).await?;
        Ok(Paginated::new(items, total, page))
    }
}
