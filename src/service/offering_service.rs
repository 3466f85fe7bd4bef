use crate::dto::offering_dto::{CreateOfferingRequest, UpdateOfferingRequest};
use crate::dto::pagination::{PageParams, Paginated};
use crate::model::service_offering::ServiceOffering;
use crate::repository::offering_repo::{OfferingFilter, OfferingRepository};
use crate::service::resolve_slug;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

#[async_trait]
pub trait OfferingService: Send + Sync {
    async fn create_offering(&self, request: CreateOfferingRequest) -> Result<ServiceOffering, ServiceError>;
    async fn get_offering(&self, slug: &str) -> Result<ServiceOffering, ServiceError>;
    async fn update_offering(&self, slug: &str, request: UpdateOfferingRequest) -> Result<ServiceOffering, ServiceError>;
    async fn delete_offering(&self, slug: &str) -> Result<(), ServiceError>;
    async fn list_offerings(&self, filter: OfferingFilter, page: PageParams) -> Result<Paginated<ServiceOffering>, ServiceError>;
}

pub struct OfferingServiceImpl {
    pub offering_repo: Arc<dyn OfferingRepository>,
}

impl OfferingServiceImpl {
    pub fn new(offering_repo: Arc<dyn OfferingRepository>) -> Self {
        Self { offering_repo }
    }

    async fn ensure_slug_free(&self, slug: &str) -> Result<(), ServiceError> {
        match self.offering_repo.find_by_slug(slug).await? {
            Some(_) => Err(ServiceError::Conflict(format!("A service with slug '{}' already exists", slug))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OfferingService for OfferingServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_offering(&self, request: CreateOfferingRequest) -> Result<ServiceOffering, ServiceError> {
        let slug = resolve_slug(request.slug.as_deref(), &request.title)?;
        self.ensure_slug_free(&slug).await?;

        let offering = ServiceOffering {
            id: None,
            title: request.title,
            slug,
            description: request.description,
            features: request.features,
            starting_price: request.starting_price,
            price_unit: request.price_unit,
            delivery_time: request.delivery_time,
            active: request.active.unwrap_or(true),
            sort_order: request.sort_order.unwrap_or(0),
            created_at: None,
            updated_at: None,
        };
        let created = self.offering_repo.create(offering).await?;
        info!("Service offering created: {}", created.slug);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_offering(&self, slug: &str) -> Result<ServiceOffering, ServiceError> {
        self.offering_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Service not found: {}", slug)))
    }

    #[instrument(skip(self, request))]
    async fn update_offering(&self, slug: &str, request: UpdateOfferingRequest) -> Result<ServiceOffering, ServiceError> {
        let mut offering = self.get_offering(slug).await?;

        if let Some(ref explicit) = request.slug {
            let new_slug = resolve_slug(Some(explicit), &offering.title)?;
            if new_slug != offering.slug {
                self.ensure_slug_free(&new_slug).await?;
                offering.slug = new_slug;
            }
        }
        if let Some(title) = request.title {
            offering.title = title;
        }
        if let Some(description) = request.description {
            offering.description = description;
        }
        if let Some(features) = request.features {
            offering.features = features;
        }
        if let Some(price) = request.starting_price {
            offering.starting_price = price;
        }
        if request.price_unit.is_some() {
            offering.price_unit = request.price_unit;
        }
        if let Some(delivery_time) = request.delivery_time {
            offering.delivery_time = delivery_time;
        }
        if let Some(active) = request.active {
            offering.active = active;
        }
        if let Some(sort_order) = request.sort_order {
            offering.sort_order = sort_order;
        }

        Ok(self.offering_repo.update(offering).await?)
    }

    #[instrument(skip(self))]
    async fn delete_offering(&self, slug: &str) -> Result<(), ServiceError> {
        Ok(self.offering_repo.delete_by_slug(slug).await?)
    }

    #[instrument(skip(self, filter))]
    async fn list_offerings(&self, filter: OfferingFilter, page: PageParams) -> Result<Paginated<ServiceOffering>, ServiceError> {
        let (items, total) = self.offering_repo.list(&filter, page).await?;
        Ok(Paginated::new(items, total, page))
    }
}
