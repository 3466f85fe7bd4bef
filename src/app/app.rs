use axum::{Router, http::{HeaderValue, Method, header::{AUTHORIZATION, CONTENT_TYPE}}, middleware, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, ConfigError, EmailConfig, JwtConfig, MinioConfig, MongoConfig};
use crate::handler::auth_handler::AuthHandlerState;
use crate::middlewares::admin_middleware::{AdminAuthState, ROLE_ADMIN, ROLE_EDITOR};
use crate::middlewares::maintenance_middleware::maintenance_redirect;
use crate::model::user::AdminRole;
use crate::repository::booking_repo::{BookingRepository, MongoBookingRepository};
use crate::repository::category_repo::{CategoryRepository, MongoCategoryRepository};
use crate::repository::contact_repo::{ContactRepository, MongoContactRepository};
use crate::repository::mongo;
use crate::repository::offering_repo::{MongoOfferingRepository, OfferingRepository};
use crate::repository::product_repo::{MongoProductRepository, ProductRepository};
use crate::repository::project_repo::{MongoProjectRepository, ProjectRepository};
use crate::repository::repository_error::RepositoryError;
use crate::repository::settings_repo::{MongoSettingsRepository, SettingsRepository};
use crate::repository::user_repo::{AdminUserRepository, MongoAdminUserRepository};
use crate::router::{
    auth_router::auth_router, booking_router::booking_router, category_router::category_router,
    contact_router::contact_router, offering_router::offering_router, product_router::product_router,
    project_router::project_router, settings_router::settings_router,
};
use crate::service::auth_service::{AuthService, AuthServiceImpl, NewAdminUser};
use crate::service::booking_service::BookingServiceImpl;
use crate::service::category_service::CategoryServiceImpl;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::notification::Notifier;
use crate::service::offering_service::OfferingServiceImpl;
use crate::service::product_service::ProductServiceImpl;
use crate::service::project_service::ProjectServiceImpl;
use crate::service::settings_service::{SettingsService, SettingsServiceImpl};
use crate::util::email::{Mailer, SmtpEmailService};
use crate::util::jwt::JwtTokenUtilsImpl;
use crate::util::maintenance_cache::MaintenanceCache;
use crate::util::minio::{ImageStore, MinioError, MinioService};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Database setup error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Object storage error: {0}")]
    Storage(#[from] MinioError),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// One implementation per persistence seam
pub struct Repositories {
    pub projects: Arc<dyn ProjectRepository>,
    pub offerings: Arc<dyn OfferingRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub users: Arc<dyn AdminUserRepository>,
}

impl Repositories {
    pub fn mongo(db: &mongodb::Database) -> Self {
        Repositories {
            projects: Arc::new(MongoProjectRepository::new(db)),
            offerings: Arc::new(MongoOfferingRepository::new(db)),
            products: Arc::new(MongoProductRepository::new(db)),
            categories: Arc::new(MongoCategoryRepository::new(db)),
            contacts: Arc::new(MongoContactRepository::new(db)),
            bookings: Arc::new(MongoBookingRepository::new(db)),
            settings: Arc::new(MongoSettingsRepository::new(db)),
            users: Arc::new(MongoAdminUserRepository::new(db)),
        }
    }
}

#[derive(Clone)]
pub struct AppServices {
    pub projects: Arc<ProjectServiceImpl>,
    pub offerings: Arc<OfferingServiceImpl>,
    pub products: Arc<ProductServiceImpl>,
    pub categories: Arc<CategoryServiceImpl>,
    pub contacts: Arc<ContactServiceImpl>,
    pub bookings: Arc<BookingServiceImpl>,
    pub settings: Arc<SettingsServiceImpl>,
    pub auth: Arc<AuthServiceImpl>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl AppServices {
    pub fn new(
        repos: Repositories,
        image_store: Arc<dyn ImageStore>,
        mailer: Option<Arc<dyn Mailer>>,
        jwt_config: JwtConfig,
        config: &AppConfig,
    ) -> Self {
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let settings = Arc::new(SettingsServiceImpl::new(
            repos.settings.clone(),
            MaintenanceCache::new(Duration::from_secs(config.maintenance_cache_ttl_secs)),
            config.whatsapp_number.clone(),
        ));
        let notifier = Arc::new(Notifier::new(mailer, repos.settings.clone()));

        AppServices {
            projects: Arc::new(ProjectServiceImpl::new(repos.projects.clone(), repos.categories.clone())),
            offerings: Arc::new(OfferingServiceImpl::new(repos.offerings)),
            products: Arc::new(ProductServiceImpl::new(
                repos.products.clone(),
                repos.categories.clone(),
                image_store,
            )),
            categories: Arc::new(CategoryServiceImpl::new(
                repos.categories,
                repos.projects,
                repos.products.clone(),
            )),
            contacts: Arc::new(ContactServiceImpl::new(repos.contacts, notifier.clone())),
            bookings: Arc::new(BookingServiceImpl::new(
                repos.bookings,
                repos.products,
                settings.clone() as Arc<dyn SettingsService>,
                notifier,
            )),
            settings,
            auth: Arc::new(AuthServiceImpl::new(repos.users, jwt_utils.clone())),
            jwt_utils,
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if allowed.is_empty() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        // Credentialed requests need explicit origins
        layer.allow_origin(AllowOrigin::list(allowed)).allow_credentials(true)
    }
}

/// Full HTTP surface: API routers, maintenance redirect, CORS and request tracing
pub fn create_router(services: &AppServices, config: &AppConfig) -> Router {
    let staff_auth = Arc::new(AdminAuthState::new(services.jwt_utils.clone(), ROLE_EDITOR));
    let admin_only = Arc::new(AdminAuthState::new(services.jwt_utils.clone(), ROLE_ADMIN));
    let auth_state = Arc::new(AuthHandlerState {
        auth_service: services.auth.clone(),
        cookie_name: services.jwt_utils.jwt_config.cookie_name.clone(),
        cookie_secure: config.cookie_secure,
    });
    let settings: Arc<dyn SettingsService> = services.settings.clone();

    Router::new()
        .merge(project_router(services.projects.clone(), staff_auth.clone()))
        .merge(offering_router(services.offerings.clone(), staff_auth.clone()))
        .merge(product_router(services.products.clone(), staff_auth.clone()))
        .merge(category_router(services.categories.clone(), staff_auth.clone()))
        .merge(contact_router(services.contacts.clone(), staff_auth.clone()))
        .merge(booking_router(services.bookings.clone(), staff_auth.clone()))
        .merge(settings_router(services.settings.clone(), admin_only))
        .merge(auth_router(auth_state, staff_auth))
        .route("/health", get(|| async { "OK" }))
        .layer(middleware::from_fn_with_state(settings, maintenance_redirect))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Create the bootstrap account from `ADMIN_*` when it is missing
pub async fn create_first_admin_user(auth: &dyn AuthService) {
    let admin_conf = match AdminUserConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            warn!("Admin user config not loaded: {e}");
            return;
        }
    };

    let user = NewAdminUser {
        email: admin_conf.email,
        password: admin_conf.password,
        name: admin_conf.name,
        role: AdminRole::Admin,
    };
    match auth.ensure_admin_user(user).await {
        Ok(true) => info!("First admin user created."),
        Ok(false) => {}
        Err(e) => error!("Failed to create admin user: {e}"),
    }
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub services: AppServices,
}

impl App {
    pub async fn new() -> Result<Self, StartupError> {
        let config = AppConfig::from_env()?;
        let jwt_config = JwtConfig::from_env()?;
        let mongo_config = MongoConfig::from_env()?;
        let minio_config = MinioConfig::from_env()?;

        let db = mongo::connect(&mongo_config).await?;
        mongo::ensure_indexes(&db).await?;
        let repos = Repositories::mongo(&db);

        let image_store: Arc<dyn ImageStore> = Arc::new(MinioService::new(minio_config).await?);

        let mailer: Option<Arc<dyn Mailer>> = match EmailConfig::from_env().map_err(|e| e.to_string()).and_then(|c| {
            SmtpEmailService::new(c).map_err(|e| e.to_string())
        }) {
            Ok(service) => Some(Arc::new(service) as Arc<dyn Mailer>),
            Err(e) => {
                warn!("Email notifications disabled: {}", e);
                None
            }
        };

        let services = AppServices::new(repos, image_store, mailer, jwt_config, &config);
        create_first_admin_user(services.auth.as_ref()).await;

        let router = create_router(&services, &config);
        Ok(App { config, router, services })
    }

    pub async fn start(self) -> Result<(), StartupError> {
        let host: std::net::IpAddr = self
            .config
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("Invalid APP_HOST: {}", self.config.host)))?;
        let addr = SocketAddr::new(host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Server running at http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
