use crate::dto::pagination::{PageParams, Paginated};
use crate::dto::parse_enum;
use crate::dto::project_dto::{CreateProjectRequest, UpdateProjectRequest};
use crate::model::project::{Project, ProjectStatus};
use crate::repository::category_repo::CategoryRepository;
use crate::repository::project_repo::{ProjectFilter, ProjectRepository};
use crate::service::{resolve_category, resolve_slug};
use crate::util::error::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn create_project(&self, request: CreateProjectRequest) -> Result<Project, ServiceError>;
    async fn get_project(&self, slug: &str) -> Result<Project, ServiceError>;
    async fn update_project(&self, slug: &str, request: UpdateProjectRequest) -> Result<Project, ServiceError>;
    async fn delete_project(&self, slug: &str) -> Result<(), ServiceError>;
    async fn list_projects(&self, filter: ProjectFilter, page: PageParams) -> Result<Paginated<Project>, ServiceError>;
}

pub struct ProjectServiceImpl {
    pub project_repo: Arc<dyn ProjectRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
}

impl ProjectServiceImpl {
    pub fn new(project_repo: Arc<dyn ProjectRepository>, category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { project_repo, category_repo }
    }

    async fn ensure_slug_free(&self, slug: &str) -> Result<(), ServiceError> {
        if self.project_repo.find_by_slug(slug).await?.is_some() {
            warn!("Project slug already taken: {}", slug);
            return Err(ServiceError::Conflict(format!("A project with slug '{}' already exists", slug)));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectService for ProjectServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_project(&self, request: CreateProjectRequest) -> Result<Project, ServiceError> {
        let slug = resolve_slug(request.slug.as_deref(), &request.title)?;
        self.ensure_slug_free(&slug).await?;
        let category = resolve_category(self.category_repo.as_ref(), &request.category).await?;

        let status = match request.status.as_deref() {
            Some(s) => parse_enum::<ProjectStatus>(s)?,
            None => ProjectStatus::Draft,
        };
        let project = Project {
            id: None,
            title: request.title,
            slug,
            description: request.description,
            tech_stack: request.tech_stack,
            images: request.images,
            category,
            status,
            featured: request.featured,
            live_url: request.live_url,
            created_at: None,
            updated_at: None,
        };
        let created = self.project_repo.create(project).await?;
        info!("Project created: {}", created.slug);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get_project(&self, slug: &str) -> Result<Project, ServiceError> {
        self.project_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project not found: {}", slug)))
    }

    #[instrument(skip(self, request))]
    async fn update_project(&self, slug: &str, request: UpdateProjectRequest) -> Result<Project, ServiceError> {
        let mut project = self.get_project(slug).await?;

        if let Some(ref explicit) = request.slug {
            let new_slug = resolve_slug(Some(explicit), &project.title)?;
            if new_slug != project.slug {
                self.ensure_slug_free(&new_slug).await?;
                project.slug = new_slug;
            }
        }
        if let Some(title) = request.title {
            project.title = title;
        }
        if let Some(description) = request.description {
            project.description = description;
        }
        if let Some(tech_stack) = request.tech_stack {
            project.tech_stack = tech_stack;
        }
        if let Some(images) = request.images {
            project.images = images;
        }
        if let Some(ref category) = request.category {
            project.category = resolve_category(self.category_repo.as_ref(), category).await?;
        }
        if let Some(ref status) = request.status {
            project.status = parse_enum(status)?;
        }
        if let Some(featured) = request.featured {
            project.featured = featured;
        }
        if request.live_url.is_some() {
            project.live_url = request.live_url;
        }

        Ok(self.project_repo.update(project).await?)
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, slug: &str) -> Result<(), ServiceError> {
        Ok(self.project_repo.delete_by_slug(slug).await?)
    }

    #[instrument(skip(self, filter))]
    async fn list_projects(&self, filter: ProjectFilter, page: PageParams) -> Result<Paginated<Project>, ServiceError> {
        let (items, total) = self.project_repo.list(&filter, page).await?;
        Ok(Paginated::new(items, total, page))
    }
}
