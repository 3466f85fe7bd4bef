//! Live repository checks. Run with a local MongoDB and
//! `cargo test --test mongo_repository_tests -- --ignored`.

use dotenv::dotenv;
use showroom_backend::config::MongoConfig;
use showroom_backend::dto::pagination::PageParams;
use showroom_backend::model::category::{Category, CategoryType};
use showroom_backend::model::project::{Project, ProjectStatus};
use showroom_backend::model::settings::Settings;
use showroom_backend::repository::category_repo::{CategoryRepository, MongoCategoryRepository};
use showroom_backend::repository::mongo;
use showroom_backend::repository::project_repo::{MongoProjectRepository, ProjectFilter, ProjectRepository};
use showroom_backend::repository::repository_error::RepositoryError;
use showroom_backend::repository::settings_repo::{MongoSettingsRepository, SettingsRepository};

async fn test_db() -> mongodb::Database {
    let _ = dotenv();
    let config = MongoConfig::from_env().expect("mongo config");
    let db = mongo::connect(&config).await.expect("mongo connection");
    mongo::ensure_indexes(&db).await.expect("indexes");
    db
}

fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore]
async fn test_project_crud_and_unique_slug() {
    let repo = MongoProjectRepository::new(&test_db().await);
    let slug = unique("test-project");
    let project = Project {
        id: None,
        title: "Test project".to_string(),
        slug: slug.clone(),
        description: "d".to_string(),
        tech_stack: vec!["Rust".to_string()],
        images: vec![],
        category: slug.clone(),
        status: ProjectStatus::Published,
        featured: false,
        live_url: None,
        created_at: None,
        updated_at: None,
    };

    let created = repo.create(project.clone()).await.unwrap();
    assert!(created.id.is_some());
    assert!(created.created_at.is_some());

    assert!(matches!(repo.create(project).await, Err(RepositoryError::AlreadyExists(_))));

    let filter = ProjectFilter { category: Some(slug.clone()), ..Default::default() };
    let (items, total) = repo.list(&filter, PageParams::default()).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].slug, slug);
    assert_eq!(repo.count_by_category(&slug).await.unwrap(), 1);

    let mut changed = created.clone();
    changed.featured = true;
    assert!(repo.update(changed).await.unwrap().featured);

    repo.delete_by_slug(&slug).await.unwrap();
    assert!(repo.find_by_slug(&slug).await.unwrap().is_none());
    assert!(matches!(repo.delete_by_slug(&slug).await, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_category_list_by_type() {
    let repo = MongoCategoryRepository::new(&test_db().await);
    let slug = unique("test-category");
    let created = repo
        .create(Category {
            id: None,
            name: "Test category".to_string(),
            slug: slug.clone(),
            category_type: CategoryType::Service,
            description: None,
            created_at: None,
            updated_at: None,
        })
        .await
        .unwrap();

    let services = repo.list(Some(CategoryType::Service)).await.unwrap();
    assert!(services.iter().any(|c| c.slug == slug));
    let products = repo.list(Some(CategoryType::Product)).await.unwrap();
    assert!(!products.iter().any(|c| c.slug == slug));

    repo.delete(created.id.unwrap()).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_settings_upsert() {
    let repo = MongoSettingsRepository::new(&test_db().await);
    let previous = repo.get().await.unwrap();

    let saved = repo
        .save(Settings { company_name: "Repository test".to_string(), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(saved.company_name, "Repository test");
    assert_eq!(repo.get().await.unwrap().unwrap().company_name, "Repository test");

    if let Some(previous) = previous {
        repo.save(previous).await.unwrap();
    }
}
