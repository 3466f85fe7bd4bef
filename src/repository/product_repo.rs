use crate::dto::pagination::PageParams;
use crate::model::now_timestamp;
use crate::model::product::Product;
use crate::repository::mongo::{find_page, set_document, PRODUCTS};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(ref category) = self.category {
            filter.insert("category", category.as_str());
        }
        if let Some(in_stock) = self.in_stock {
            filter.insert("inStock", in_stock);
        }
        filter
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.as_ref().map_or(true, |c| &product.category == c)
            && self.in_stock.map_or(true, |s| product.in_stock == s)
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: Product) -> RepositoryResult<Product>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>>;
    async fn update(&self, product: Product) -> RepositoryResult<Product>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, filter: &ProductFilter, page: PageParams) -> RepositoryResult<(Vec<Product>, u64)>;
    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64>;
}

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        MongoProductRepository { collection: db.collection::<Product>(PRODUCTS) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(model = %product.model))]
    async fn create(&self, mut product: Product) -> RepositoryResult<Product> {
        info!("Creating new product");
        product.id = Some(ObjectId::new());
        let now = now_timestamp();
        product.created_at = Some(now.clone());
        product.updated_at = Some(now);

        match self.collection.insert_one(&product, None).await {
            Ok(_) => Ok(product),
            Err(e) => {
                error!("Failed to create product: {}", e);
                Err(RepositoryError::database(format!("Failed to create product: {}", e)))
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>> {
        self.collection
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch product by ID: {}", e)))
    }

    #[instrument(skip(self, product))]
    async fn update(&self, mut product: Product) -> RepositoryResult<Product> {
        let id = product
            .id
            .ok_or_else(|| RepositoryError::validation("Product has no id"))?;
        product.updated_at = Some(now_timestamp());

        let result = self
            .collection
            .update_one(doc! { "_id": id }, set_document(&product)?, None)
            .await?;
        if result.matched_count == 0 {
            error!("No product found to update for ID: {}", id);
            return Err(RepositoryError::not_found(format!("No product found for ID: {}", id)));
        }
        Ok(product)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("No product found for ID: {}", id)));
        }
        info!("Product deleted: {}", id);
        Ok(())
    }

    #[instrument(skip(self), fields(page = page.page, limit = page.limit))]
    async fn list(&self, filter: &ProductFilter, page: PageParams) -> RepositoryResult<(Vec<Product>, u64)> {
        find_page(&self.collection, filter.to_document(), doc! { "createdAt": -1 }, page).await
    }

    #[instrument(skip(self))]
    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64> {
        Ok(self
            .collection
            .count_documents(doc! { "category": category_slug }, None)
            .await?)
    }
}
