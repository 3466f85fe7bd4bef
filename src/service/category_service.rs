use crate::dto::category_dto::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::dto::parse_enum;
use crate::model::category::{Category, CategoryType};
use crate::repository::category_repo::CategoryRepository;
use crate::repository::product_repo::ProductRepository;
use crate::repository::project_repo::ProjectRepository;
use crate::service::resolve_slug;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, ServiceError>;
    async fn get_category(&self, id: ObjectId) -> Result<Category, ServiceError>;
    async fn update_category(&self, id: ObjectId, request: UpdateCategoryRequest) -> Result<Category, ServiceError>;
    /// Refused while any project or product still references the slug
    async fn delete_category(&self, id: ObjectId) -> Result<(), ServiceError>;
    async fn list_categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>, ServiceError>;
}

pub struct CategoryServiceImpl {
    pub category_repo: Arc<dyn CategoryRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
}

impl CategoryServiceImpl {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self { category_repo, project_repo, product_repo }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, ServiceError> {
        let slug = resolve_slug(request.slug.as_deref(), &request.name)?;
        if self.category_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ServiceError::Conflict(format!("A category with slug '{}' already exists", slug)));
        }

        let category = Category {
            id: None,
            name: request.name,
            slug,
            category_type: parse_enum(&request.category_type)?,
            description: request.description,
            created_at: None,
            updated_at: None,
        };
        let created = self.category_repo.create(category).await?;
        info!("Category created: {}", created.slug);
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_category(&self, id: ObjectId) -> Result<Category, ServiceError> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Category not found: {}", id)))
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_category(&self, id: ObjectId, request: UpdateCategoryRequest) -> Result<Category, ServiceError> {
        let mut category = self.get_category(id).await?;
        if let Some(name) = request.name {
            category.name = name;
        }
        if request.description.is_some() {
            category.description = request.description;
        }
        Ok(self.category_repo.update(category).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_category(&self, id: ObjectId) -> Result<(), ServiceError> {
        let category = self.get_category(id).await?;

        let projects = self.project_repo.count_by_category(&category.slug).await?;
        let products = self.product_repo.count_by_category(&category.slug).await?;
        let in_use = projects + products;
        if in_use > 0 {
            warn!("Refusing to delete category '{}' still used by {} item(s)", category.slug, in_use);
            return Err(ServiceError::InvalidInput(format!(
                "Category '{}' is still used by {} item(s) ({} project(s), {} product(s))",
                category.slug, in_use, projects, products
            )));
        }

        self.category_repo.delete(id).await?;
        info!("Category deleted: {}", category.slug);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self, category_type: Option<CategoryType>) -> Result<Vec<Category>, ServiceError> {
        Ok(self.category_repo.list(category_type).await?)
    }
}
