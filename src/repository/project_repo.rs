use crate::dto::pagination::PageParams;
use crate::model::now_timestamp;
use crate::model::project::{Project, ProjectStatus};
use crate::repository::mongo::{find_page, set_document, PROJECTS};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use tracing::{error, info, instrument};

/// Optional filters of the project listing
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(status) = self.status {
            filter.insert("status", status.as_str());
        }
        if let Some(ref category) = self.category {
            filter.insert("category", category.as_str());
        }
        if let Some(featured) = self.featured {
            filter.insert("featured", featured);
        }
        filter
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s)
            && self.category.as_ref().map_or(true, |c| &project.category == c)
            && self.featured.map_or(true, |f| project.featured == f)
    }
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, project: Project) -> RepositoryResult<Project>;
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Project>>;
    async fn update(&self, project: Project) -> RepositoryResult<Project>;
    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()>;
    async fn list(&self, filter: &ProjectFilter, page: PageParams) -> RepositoryResult<(Vec<Project>, u64)>;
    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64>;
}

pub struct MongoProjectRepository {
    collection: Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        MongoProjectRepository { collection: db.collection::<Project>(PROJECTS) }
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    #[instrument(skip(self, project), fields(slug = %project.slug))]
    async fn create(&self, mut project: Project) -> RepositoryResult<Project> {
        info!("Creating new project");
        project.id = Some(ObjectId::new());
        let now = now_timestamp();
        project.created_at = Some(now.clone());
        project.updated_at = Some(now);

        match self.collection.insert_one(&project, None).await {
            Ok(_) => {
                info!("Project created successfully");
                Ok(project)
            }
            Err(e) => {
                error!("Failed to create project: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Project>> {
        self.collection
            .find_one(doc! { "slug": slug }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to fetch project by slug: {}", e)))
    }

    #[instrument(skip(self, project), fields(slug = %project.slug))]
    async fn update(&self, mut project: Project) -> RepositoryResult<Project> {
        let id = project
            .id
            .ok_or_else(|| RepositoryError::validation("Project has no id"))?;
        project.updated_at = Some(now_timestamp());

        let result = self
            .collection
            .update_one(doc! { "_id": id }, set_document(&project)?, None)
            .await?;
        if result.matched_count == 0 {
            error!("No project found to update for ID: {}", id);
            return Err(RepositoryError::not_found(format!("No project found for ID: {}", id)));
        }
        info!("Project updated successfully for ID: {}", id);
        Ok(project)
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "slug": slug }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete project: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!("Project not found: {}", slug)));
        }
        info!("Project deleted: {}", slug);
        Ok(())
    }

    #[instrument(skip(self), fields(page = page.page, limit = page.limit))]
    async fn list(&self, filter: &ProjectFilter, page: PageParams) -> RepositoryResult<(Vec<Project>, u64)> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(status: ProjectStatus, featured: bool) -> Project {
        Project {
            id: None,
            title: "Site".to_string(),
            slug: "site".to_string(),
            description: "d".to_string(),
            tech_stack: vec![],
            images: vec![],
            category: "web".to_string(),
            status,
            featured,
            live_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_filter_document_only_has_given_fields() {
        let filter = ProjectFilter { status: Some(ProjectStatus::Published), ..Default::default() };
        assert_eq!(filter.to_document(), doc! { "status": "published" });
        assert!(ProjectFilter::default().to_document().is_empty());
    }

    #[test]
    fn test_filter_matches() {
        let filter = ProjectFilter { featured: Some(true), category: Some("web".to_string()), ..Default::default() };
        assert!(filter.matches(&sample(ProjectStatus::Draft, true)));
        assert!(!filter.matches(&sample(ProjectStatus::Draft, false)));
    }
}
