use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::pagination::{PageParams, Paginated};
use crate::model::booking::{BookingRequest, BookingStatus};
use crate::repository::booking_repo::BookingRepository;
use crate::repository::product_repo::ProductRepository;
use crate::service::notification::Notifier;
use crate::service::parse_object_id;
use crate::service::settings_service::SettingsService;
use crate::util::email::NotificationBody;
use crate::util::error::ServiceError;
use crate::util::whatsapp;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{info, instrument};

/// A stored booking and where to continue the conversation
#[derive(Debug, Clone)]
pub struct BookingReceipt {
    pub booking: BookingRequest,
    pub whatsapp_url: Option<String>,
}

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn submit_booking(&self, request: CreateBookingRequest) -> Result<BookingReceipt, ServiceError>;
    async fn update_booking_status(&self, id: ObjectId, status: BookingStatus) -> Result<BookingRequest, ServiceError>;
    async fn delete_booking(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_bookings(&self, status: Option<BookingStatus>, page: PageParams) -> Result<Paginated<BookingRequest>, ServiceError>;
}

pub struct BookingServiceImpl {
    pub booking_repo: Arc<dyn BookingRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub settings_service: Arc<dyn SettingsService>,
    pub notifier: Arc<Notifier>,
}

impl BookingServiceImpl {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        product_repo: Arc<dyn ProductRepository>,
        settings_service: Arc<dyn SettingsService>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self { booking_repo, product_repo, settings_service, notifier }
    }
}

/// Pre-filled WhatsApp message summarizing the booking
pub fn whatsapp_summary(booking: &BookingRequest) -> String {
    let mut text = format!(
        "Hello, I would like to book an installation.\nName: {}\nPhone: {}\nProduct: {}\nPreferred date: {}\nAddress: {}",
        booking.customer_name, booking.customer_phone, booking.product_model, booking.preferred_date, booking.address
    );
    if let Some(ref notes) = booking.notes {
        text.push_str(&format!("\nNotes: {}", notes));
    }
    text
}

#[async_trait]
impl BookingService for BookingServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.product_model))]
    async fn submit_booking(&self, request: CreateBookingRequest) -> Result<BookingReceipt, ServiceError> {
        let product_id = match request.product_id.as_deref() {
            Some(raw) => {
                let id = parse_object_id(raw, "product")?;
                if self.product_repo.find_by_id(id).await?.is_none() {
                    return Err(ServiceError::InvalidInput(format!("Unknown product: {}", raw)));
                }
                Some(id)
            }
            None => None,
        };

        let booking = BookingRequest {
            id: None,
            customer_name: request.customer_name.trim().to_string(),
            customer_phone: request.customer_phone.trim().to_string(),
            customer_email: request.customer_email,
            preferred_date: request.preferred_date,
            address: request.address,
            product_id,
            product_model: request.product_model,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            status: BookingStatus::Pending,
            created_at: None,
            updated_at: None,
        };
        let booking = self.booking_repo.create(booking).await?;
        info!("Booking stored");

        let body = NotificationBody {
            heading: "New installation booking",
            rows: vec![
                ("Customer", booking.customer_name.clone()),
                ("Phone", booking.customer_phone.clone()),
                ("Email", booking.customer_email.clone().unwrap_or_else(|| "-".to_string())),
                ("Product", booking.product_model.clone()),
                ("Preferred date", booking.preferred_date.clone()),
                ("Address", booking.address.clone()),
                ("Notes", booking.notes.clone().unwrap_or_else(|| "-".to_string())),
            ],
        };
        let subject = format!("New booking: {} for {}", booking.product_model, booking.customer_name);
        self.notifier
            .notify(&subject, body, booking.customer_email.as_deref())
            .await;

        let whatsapp_url = self
            .settings_service
            .whatsapp_number()
            .await
            .and_then(|number| whatsapp::deep_link(&number, &whatsapp_summary(&booking)));

        Ok(BookingReceipt { booking, whatsapp_url })
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_booking_status(&self, id: ObjectId, status: BookingStatus) -> Result<BookingRequest, ServiceError> {
        Ok(self.booking_repo.update_status(id, status).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_booking(&self, id: ObjectId) -> Result<(), ServiceError> {
        Ok(self.booking_repo.delete(id).await?)
    }

    #[instrument(skip(self))]
    async fn list_bookings(&self, status: Option<BookingStatus>, page: PageParams) -> Result<Paginated<BookingRequest>, ServiceError> {
        let (items, total) = self.booking_repo.list(status, page).await?;
        Ok(Paginated::new(items, total, page))
    }
}
