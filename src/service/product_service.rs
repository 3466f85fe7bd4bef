use crate::dto::pagination::{PageParams, Paginated};
use crate::dto::product_dto::{CreateProductRequest, ImageUpload, UpdateProductRequest};
use crate::model::product::Product;
use crate::repository::category_repo::CategoryRepository;
use crate::repository::product_repo::{ProductFilter, ProductRepository};
use crate::service::resolve_category;
use crate::util::error::ServiceError;
use crate::util::minio::{ImageStore, MinioError};
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create_product(&self, request: CreateProductRequest, image: Option<ImageUpload>) -> Result<Product, ServiceError>;
    async fn get_product(&self, id: ObjectId) -> Result<Product, ServiceError>;
    async fn update_product(&self, id: ObjectId, request: UpdateProductRequest, image: Option<ImageUpload>) -> Result<Product, ServiceError>;
    async fn delete_product(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_products(&self, filter: ProductFilter, page: PageParams) -> Result<Paginated<Product>, ServiceError>;
}

pub struct ProductServiceImpl {
    pub product_repo: Arc<dyn ProductRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub image_store: Arc<dyn ImageStore>,
}

impl ProductServiceImpl {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        image_store: Arc<dyn ImageStore>,
    ) -> Self {
        Self { product_repo, category_repo, image_store }
    }

    async fn upload(&self, image: ImageUpload) -> Result<String, ServiceError> {
        info!("Uploading product image '{}' ({} bytes)", image.filename, image.content.len());
        self.image_store
            .upload_image(&image.filename, &image.content_type, image.content)
            .await
            .map_err(|e| match e {
                MinioError::InvalidArguments(msg) => ServiceError::InvalidInput(msg),
                other => {
                    error!("Image upload failed: {}", other);
                    ServiceError::InternalError(format!("Image upload failed: {}", other))
                }
            })
    }

    /// Image removal never fails the surrounding request.
    async fn remove_image_best_effort(&self, url: &str) {
        if let Err(e) = self.image_store.delete_image(url).await {
            warn!("Failed to remove product image {}: {}", url, e);
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    #[instrument(skip(self, request, image), fields(model = %request.model))]
    async fn create_product(&self, request: CreateProductRequest, image: Option<ImageUpload>) -> Result<Product, ServiceError> {
        let category = resolve_category(self.category_repo.as_ref(), &request.category).await?;
        let image_url = match image {
            Some(image) => Some(self.upload(image).await?),
            None => request.image_url,
        };

        let product = Product {
            id: None,
            name: request.name,
            model: request.model,
            category,
            capacity: request.capacity,
            price: request.price,
            image_url: image_url.clone(),
            description: request.description,
            features: request.features,
            in_stock: request.in_stock.unwrap_or(true),
            created_at: None,
            updated_at: None,
        };

        match self.product_repo.create(product).await {
            Ok(created) => {
                info!("Product created: {}", crate::dto::id_hex(&created.id));
                Ok(created)
            }
            Err(e) => {
                if let Some(ref url) = image_url {
                    self.remove_image_best_effort(url).await;
                }
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_product(&self, id: ObjectId) -> Result<Product, ServiceError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product not found: {}", id)))
    }

    #[instrument(skip(self, request, image), fields(id = %id))]
    async fn update_product(&self, id: ObjectId, request: UpdateProductRequest, image: Option<ImageUpload>) -> Result<Product, ServiceError> {
        let mut product = self.get_product(id).await?;
        let previous_image = product.image_url.clone();

        if let Some(name) = request.name {
            product.name = name;
        }
        if let Some(model) = request.model {
            product.model = model;
        }
        if let Some(ref category) = request.category {
            product.category = resolve_category(self.category_repo.as_ref(), category).await?;
        }
        if let Some(capacity) = request.capacity {
            product.capacity = capacity;
        }
        if let Some(price) = request.price {
            product.price = price;
        }
        if request.description.is_some() {
            product.description = request.description;
        }
        if let Some(features) = request.features {
            product.features = features;
        }
        if let Some(in_stock) = request.in_stock {
            product.in_stock = in_stock;
        }
        let uploaded = match image {
            Some(image) => Some(self.upload(image).await?),
            None => None,
        };
        match uploaded {
            Some(ref url) => product.image_url = Some(url.clone()),
            None if request.image_url.is_some() => product.image_url = request.image_url,
            None => {}
        }

        let updated = match self.product_repo.update(product).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(ref url) = uploaded {
                    self.remove_image_best_effort(url).await;
                }
                return Err(e.into());
            }
        };
        if let Some(old) = previous_image {
            if updated.image_url.as_deref() != Some(old.as_str()) {
                self.remove_image_best_effort(&old).await;
            }
        }
        Ok(updated)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_product(&self, id: ObjectId) -> Result<(), ServiceError> {
        let product = self.get_product(id).await?;
        self.product_repo.delete(id).await?;
        if let Some(ref url) = product.image_url {
            self.remove_image_best_effort(url).await;
        }
        info!("Product deleted: {}", id);
        Ok(())
    }

    #[instrument(skip(self, filter))]
    async fn list_products(&self, filter: ProductFilter, page: PageParams) -> Result<Paginated<Product>, ServiceError> {
        let (items, total) = self.product_repo.list(&filter, page).await?;
        Ok(Paginated::new(items, total, page))
    }
}
