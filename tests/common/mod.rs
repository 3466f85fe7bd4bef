//! In-memory repositories and an app builder for router-level tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use bson::oid::ObjectId;
use showroom_backend::app::app::{create_router, AppServices, Repositories};
use showroom_backend::config::{AppConfig, JwtConfig};
use showroom_backend::dto::pagination::PageParams;
use showroom_backend::model::booking::{BookingRequest, BookingStatus};
use showroom_backend::model::category::{Category, CategoryType};
use showroom_backend::model::contact::{Contact, ContactStatus};
use showroom_backend::model::product::Product;
use showroom_backend::model::project::Project;
use showroom_backend::model::service_offering::ServiceOffering;
use showroom_backend::model::settings::Settings;
use showroom_backend::model::user::AdminUser;
use showroom_backend::repository::booking_repo::BookingRepository;
use showroom_backend::repository::category_repo::CategoryRepository;
use showroom_backend::repository::contact_repo::ContactRepository;
use showroom_backend::repository::offering_repo::{OfferingFilter, OfferingRepository};
use showroom_backend::repository::product_repo::{ProductFilter, ProductRepository};
use showroom_backend::repository::project_repo::{ProjectFilter, ProjectRepository};
use showroom_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use showroom_backend::repository::settings_repo::SettingsRepository;
use showroom_backend::repository::user_repo::AdminUserRepository;
use showroom_backend::util::email::{EmailError, EmailMessage, Mailer};
use showroom_backend::util::jwt::JwtTokenUtilsImpl;
use showroom_backend::util::minio::{ImageStore, MinioError};
use std::sync::{Arc, Mutex};

fn page_of<T: Clone>(items: Vec<T>, page: PageParams) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.skip() as usize)
        .take(page.limit as usize)
        .collect();
    (items, total)
}

#[derive(Default)]
pub struct MemProjects(pub Mutex<Vec<Project>>);

#[async_trait]
impl ProjectRepository for MemProjects {
    async fn create(&self, mut project: Project) -> RepositoryResult<Project> {
        let mut all = self.0.lock().unwrap();
        if all.iter().any(|p| p.slug == project.slug) {
            return Err(RepositoryError::already_exists("slug"));
        }
        project.id = Some(ObjectId::new());
        all.insert(0, project.clone());
        Ok(project)
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Project>> {
        Ok(self.0.lock().unwrap().iter().find(|p| p.slug == slug).cloned())
    }

    async fn update(&self, project: Project) -> RepositoryResult<Project> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| RepositoryError::not_found("project"))?;
        *slot = project.clone();
        Ok(project)
    }

    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|p| p.slug != slug);
        if all.len() == before {
            return Err(RepositoryError::not_found("project"));
        }
        Ok(())
    }

    async fn list(&self, filter: &ProjectFilter, page: PageParams) -> RepositoryResult<(Vec<Project>, u64)> {
        let matching = self.0.lock().unwrap().iter().filter(|p| filter.matches(p)).cloned().collect();
        Ok(page_of(matching, page))
    }

    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64> {
        Ok(self.0.lock().unwrap().iter().filter(|p| p.category == category_slug).count() as u64)
    }
}

#[derive(Default)]
pub struct MemOfferings(pub Mutex<Vec<ServiceOffering>>);

#[async_trait]
impl OfferingRepository for MemOfferings {
    async fn create(&self, mut offering: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        let mut all = self.0.lock().unwrap();
        if all.iter().any(|o| o.slug == offering.slug) {
            return Err(RepositoryError::already_exists("slug"));
        }
        offering.id = Some(ObjectId::new());
        all.push(offering.clone());
        Ok(offering)
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<ServiceOffering>> {
        Ok(self.0.lock().unwrap().iter().find(|o| o.slug == slug).cloned())
    }

    async fn update(&self, offering: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|o| o.id == offering.id)
            .ok_or_else(|| RepositoryError::not_found("service"))?;
        *slot = offering.clone();
        Ok(offering)
    }

    async fn delete_by_slug(&self, slug: &str) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|o| o.slug != slug);
        if all.len() == before {
            return Err(RepositoryError::not_found("service"));
        }
        Ok(())
    }

    async fn list(&self, filter: &OfferingFilter, page: PageParams) -> RepositoryResult<(Vec<ServiceOffering>, u64)> {
        let mut matching: Vec<ServiceOffering> =
            self.0.lock().unwrap().iter().filter(|o| filter.matches(o)).cloned().collect();
        matching.sort_by_key(|o| o.sort_order);
        Ok(page_of(matching, page))
    }
}

#[derive(Default)]
pub struct MemProducts(pub Mutex<Vec<Product>>);

#[async_trait]
impl ProductRepository for MemProducts {
    async fn create(&self, mut product: Product) -> RepositoryResult<Product> {
        product.id = Some(ObjectId::new());
        self.0.lock().unwrap().insert(0, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>> {
        Ok(self.0.lock().unwrap().iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn update(&self, product: Product) -> RepositoryResult<Product> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| RepositoryError::not_found("product"))?;
        *slot = product.clone();
        Ok(product)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|p| p.id != Some(id));
        if all.len() == before {
            return Err(RepositoryError::not_found("product"));
        }
        Ok(())
    }

    async fn list(&self, filter: &ProductFilter, page: PageParams) -> RepositoryResult<(Vec<Product>, u64)> {
        let matching = self.0.lock().unwrap().iter().filter(|p| filter.matches(p)).cloned().collect();
        Ok(page_of(matching, page))
    }

    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64> {
        Ok(self.0.lock().unwrap().iter().filter(|p| p.category == category_slug).count() as u64)
    }
}

/// Product store whose writes fail after reads succeed, like a connection dropped mid-request
#[derive(Default)]
pub struct UpdateFailingProducts(pub MemProducts);

#[async_trait]
impl ProductRepository for UpdateFailingProducts {
    async fn create(&self, product: Product) -> RepositoryResult<Product> {
        self.0.create(product).await
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Product>> {
        self.0.find_by_id(id).await
    }

    async fn update(&self, _product: Product) -> RepositoryResult<Product> {
        Err(RepositoryError::database("connection reset by peer"))
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        self.0.delete(id).await
    }

    async fn list(&self, filter: &ProductFilter, page: PageParams) -> RepositoryResult<(Vec<Product>, u64)> {
        self.0.list(filter, page).await
    }

    async fn count_by_category(&self, category_slug: &str) -> RepositoryResult<u64> {
        self.0.count_by_category(category_slug).await
    }
}

#[derive(Default)]
pub struct MemCategories(pub Mutex<Vec<Category>>);

#[async_trait]
impl CategoryRepository for MemCategories {
    async fn create(&self, mut category: Category) -> RepositoryResult<Category> {
        let mut all = self.0.lock().unwrap();
        if all.iter().any(|c| c.slug == category.slug) {
            return Err(RepositoryError::already_exists("slug"));
        }
        category.id = Some(ObjectId::new());
        all.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Category>> {
        Ok(self.0.lock().unwrap().iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        Ok(self.0.lock().unwrap().iter().find(|c| c.slug == slug).cloned())
    }

    async fn update(&self, category: Category) -> RepositoryResult<Category> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or_else(|| RepositoryError::not_found("category"))?;
        *slot = category.clone();
        Ok(category)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|c| c.id != Some(id));
        if all.len() == before {
            return Err(RepositoryError::not_found("category"));
        }
        Ok(())
    }

    async fn list(&self, category_type: Option<CategoryType>) -> RepositoryResult<Vec<Category>> {
        let mut matching: Vec<Category> = self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| category_type.map_or(true, |t| c.category_type == t))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }
}

#[derive(Default)]
pub struct MemContacts(pub Mutex<Vec<Contact>>);

#[async_trait]
impl ContactRepository for MemContacts {
    async fn create(&self, mut contact: Contact) -> RepositoryResult<Contact> {
        contact.id = Some(ObjectId::new());
        self.0.lock().unwrap().insert(0, contact.clone());
        Ok(contact)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Contact> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("contact"))
    }

    async fn update_status(&self, id: ObjectId, status: ContactStatus) -> RepositoryResult<Contact> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| RepositoryError::not_found("contact"))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|c| c.id != Some(id));
        if all.len() == before {
            return Err(RepositoryError::not_found("contact"));
        }
        Ok(())
    }

    async fn list(&self, status: Option<ContactStatus>, page: PageParams) -> RepositoryResult<(Vec<Contact>, u64)> {
        let matching = self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .cloned()
            .collect();
        Ok(page_of(matching, page))
    }
}

#[derive(Default)]
pub struct MemBookings(pub Mutex<Vec<BookingRequest>>);

#[async_trait]
impl BookingRepository for MemBookings {
    async fn create(&self, mut booking: BookingRequest) -> RepositoryResult<BookingRequest> {
        booking.id = Some(ObjectId::new());
        self.0.lock().unwrap().insert(0, booking.clone());
        Ok(booking)
    }

    async fn update_status(&self, id: ObjectId, status: BookingStatus) -> RepositoryResult<BookingRequest> {
        let mut all = self.0.lock().unwrap();
        let slot = all
            .iter_mut()
            .find(|b| b.id == Some(id))
            .ok_or_else(|| RepositoryError::not_found("booking"))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let mut all = self.0.lock().unwrap();
        let before = all.len();
        all.retain(|b| b.id != Some(id));
        if all.len() == before {
            return Err(RepositoryError::not_found("booking"));
        }
        Ok(())
    }

    async fn list(&self, status: Option<BookingStatus>, page: PageParams) -> RepositoryResult<(Vec<BookingRequest>, u64)> {
        let matching = self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        Ok(page_of(matching, page))
    }
}

#[derive(Default)]
pub struct MemSettings(pub Mutex<Option<Settings>>);

#[async_trait]
impl SettingsRepository for MemSettings {
    async fn get(&self) -> RepositoryResult<Option<Settings>> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn save(&self, settings: Settings) -> RepositoryResult<Settings> {
        *self.0.lock().unwrap() = Some(settings.clone());
        Ok(settings)
    }
}

#[derive(Default)]
pub struct MemUsers(pub Mutex<Vec<AdminUser>>);

#[async_trait]
impl AdminUserRepository for MemUsers {
    async fn insert(&self, mut user: AdminUser) -> RepositoryResult<AdminUser> {
        user.id = Some(ObjectId::new());
        user.email = user.email.to_lowercase();
        self.0.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<AdminUser>> {
        let email = email.to_lowercase();
        Ok(self.0.lock().unwrap().iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<AdminUser>> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }
}

/// Keeps uploads in memory and hands out fake public URLs
#[derive(Default)]
pub struct MemImageStore {
    pub uploads: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageStore for MemImageStore {
    async fn upload_image(&self, filename: &str, content_type: &str, data: Vec<u8>) -> Result<String, MinioError> {
        if !content_type.starts_with("image/") {
            return Err(MinioError::InvalidArguments(format!("Unsupported content type: {}", content_type)));
        }
        if data.is_empty() {
            return Err(MinioError::InvalidArguments("Empty upload".to_string()));
        }
        let url = format!("http://images.test/products/{}", filename);
        self.uploads.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn delete_image(&self, url: &str) -> Result<(), MinioError> {
        self.deleted.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Mailer whose every send fails, like an unreachable SMTP relay
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send_email(&self, _message: EmailMessage) -> Result<(), EmailError> {
        Err(EmailError::SmtpError("relay unreachable".to_string()))
    }

    fn notify_address(&self) -> Option<String> {
        Some("office@example.com".to_string())
    }
}

/// Mailer that keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// Shared handles to the in-memory state behind a test router
pub struct TestApp {
    pub router: Router,
    pub services: AppServices,
    pub projects: Arc<MemProjects>,
    pub products: Arc<MemProducts>,
    pub categories: Arc<MemCategories>,
    pub contacts: Arc<MemContacts>,
    pub bookings: Arc<MemBookings>,
    pub settings: Arc<MemSettings>,
    pub users: Arc<MemUsers>,
    pub images: Arc<MemImageStore>,
}

pub fn test_app_with(config: AppConfig, mailer: Option<Arc<dyn Mailer>>) -> TestApp {
    let projects = Arc::new(MemProjects::default());
    let products = Arc::new(MemProducts::default());
    let categories = Arc::new(MemCategories::default());
    let contacts = Arc::new(MemContacts::default());
    let bookings = Arc::new(MemBookings::default());
    let settings = Arc::new(MemSettings::default());
    let users = Arc::new(MemUsers::default());
    let images = Arc::new(MemImageStore::default());

    let repos = Repositories {
        projects: projects.clone(),
        offerings: Arc::new(MemOfferings::default()),
        products: products.clone(),
        categories: categories.clone(),
        contacts: contacts.clone(),
        bookings: bookings.clone(),
        settings: settings.clone(),
        users: users.clone(),
    };
    let services = AppServices::new(repos, images.clone(), mailer, JwtConfig::default(), &config);
    let router = create_router(&services, &config);

    TestApp { router, services, projects, products, categories, contacts, bookings, settings, users, images }
}

pub fn test_app() -> TestApp {
    test_app_with(AppConfig::default(), None)
}

pub fn category(name: &str, slug: &str, category_type: CategoryType) -> Category {
    Category {
        id: Some(ObjectId::new()),
        name: name.to_string(),
        slug: slug.to_string(),
        category_type,
        description: None,
        created_at: None,
        updated_at: None,
    }
}

/// Test app whose category store already holds the slugs the fixtures reference
pub fn catalog_app() -> TestApp {
    let app = test_app();
    app.categories.0.lock().unwrap().extend([
        category("Web Development", "web-development", CategoryType::Project),
        category("Water Heaters", "water-heaters", CategoryType::Product),
        category("Air Conditioners", "air-conditioners", CategoryType::Product),
    ]);
    app
}

pub fn jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

/// Bearer header value for a staff token with the given role
pub fn bearer(role: &str) -> String {
    use showroom_backend::util::jwt::JwtTokenUtils;
    let session = jwt_utils()
        .generate_session_token(&ObjectId::new().to_hex(), "staff@example.com", role)
        .unwrap();
    format!("Bearer {}", session.token)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
