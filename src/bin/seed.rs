//! One-off data seeding against the configured MongoDB.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use showroom_backend::config::{JwtConfig, MongoConfig};
use showroom_backend::dto::category_dto::CreateCategoryRequest;
use showroom_backend::dto::offering_dto::CreateOfferingRequest;
use showroom_backend::dto::pagination::PageParams;
use showroom_backend::model::now_timestamp;
use showroom_backend::model::product::Product;
use showroom_backend::model::user::AdminRole;
use showroom_backend::repository::category_repo::{CategoryRepository, MongoCategoryRepository};
use showroom_backend::repository::mongo;
use showroom_backend::repository::offering_repo::{MongoOfferingRepository, OfferingFilter, OfferingRepository};
use showroom_backend::repository::product_repo::{MongoProductRepository, ProductFilter, ProductRepository};
use showroom_backend::repository::project_repo::MongoProjectRepository;
use showroom_backend::repository::user_repo::MongoAdminUserRepository;
use showroom_backend::service::auth_service::{AuthService, AuthServiceImpl, NewAdminUser};
use showroom_backend::service::category_service::{CategoryService, CategoryServiceImpl};
use showroom_backend::service::offering_service::{OfferingService, OfferingServiceImpl};
use showroom_backend::util::jwt::JwtTokenUtilsImpl;
use showroom_backend::util::password::{PasswordUtils, PasswordUtilsImpl};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Seed the showroom database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an admin account unless the email already exists
    Admin {
        #[arg(long, env = "ADMIN_EMAIL")]
        email: String,
        /// Generated and printed once when omitted
        #[arg(long, env = "ADMIN_PASSWORD")]
        password: Option<String>,
        #[arg(long, env = "ADMIN_NAME", default_value = "Administrator")]
        name: String,
        /// Create an editor instead of an admin
        #[arg(long)]
        editor: bool,
    },
    /// Insert sample categories, services and products into empty collections
    Catalog,
}

type SeedResult = Result<(), Box<dyn std::error::Error>>;

async fn seed_admin(db: &mongodb::Database, email: String, password: Option<String>, name: String, editor: bool) -> SeedResult {
    let password = match password {
        Some(p) => {
            if let Err(problems) = PasswordUtilsImpl::validate_password_strength(&p) {
                return Err(problems.join("; ").into());
            }
            p
        }
        None => {
            let generated = PasswordUtilsImpl::generate_random_password(16);
            println!("Generated password for {}: {}", email, generated);
            generated
        }
    };
    let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::from_env().unwrap_or_default()));
    let auth = AuthServiceImpl::new(Arc::new(MongoAdminUserRepository::new(db)), jwt_utils);
    let role = if editor { AdminRole::Editor } else { AdminRole::Admin };

    let created = auth
        .ensure_admin_user(NewAdminUser { email: email.clone(), password, name, role })
        .await?;
    if created {
        info!("Created {} account for {}", role, email);
    } else {
        info!("Account {} already exists", email);
    }
    Ok(())
}

fn sample_categories() -> Vec<CreateCategoryRequest> {
    [
        ("Water Heaters", "product", "Electric and solar water heaters"),
        ("Air Conditioners", "product", "Split and window units"),
        ("Web Development", "project", "Sites and web applications"),
    ]
    .into_iter()
    .map(|(name, kind, description)| CreateCategoryRequest {
        name: name.to_string(),
        slug: None,
        category_type: kind.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

fn sample_offerings() -> Vec<CreateOfferingRequest> {
    vec![
        CreateOfferingRequest {
            title: "Installation".to_string(),
            slug: None,
            description: "On-site installation of purchased equipment".to_string(),
            features: vec!["Certified technicians".to_string(), "Same-week scheduling".to_string()],
            starting_price: 49.0,
            price_unit: Some("per visit".to_string()),
            delivery_time: "1-3 days".to_string(),
            active: Some(true),
            sort_order: Some(1),
        },
        CreateOfferingRequest {
            title: "Maintenance Plan".to_string(),
            slug: None,
            description: "Yearly inspection and cleaning".to_string(),
            features: vec!["Two visits per year".to_string()],
            starting_price: 99.0,
            price_unit: Some("per year".to_string()),
            delivery_time: "Scheduled".to_string(),
            active: Some(true),
            sort_order: Some(2),
        },
    ]
}

fn sample_products() -> Vec<Product> {
    let now = now_timestamp();
    let product = |name: &str, model: &str, category: &str, capacity: &str, price: f64| Product {
        id: None,
        name: name.to_string(),
        model: model.to_string(),
        category: category.to_string(),
        capacity: capacity.to_string(),
        price,
        image_url: None,
        description: None,
        features: vec![],
        in_stock: true,
        created_at: Some(now.clone()),
        updated_at: Some(now.clone()),
    };
    vec![
        product("Electric Water Heater", "EWH-80", "water-heaters", "80 L", 219.0),
        product("Solar Water Heater", "SWH-200", "water-heaters", "200 L", 899.0),
        product("Split Air Conditioner", "SAC-12", "air-conditioners", "12000 BTU", 549.0),
    ]
}

async fn seed_catalog(db: &mongodb::Database) -> SeedResult {
    let categories: Arc<dyn CategoryRepository> = Arc::new(MongoCategoryRepository::new(db));
    let products: Arc<dyn ProductRepository> = Arc::new(MongoProductRepository::new(db));
    let offerings: Arc<dyn OfferingRepository> = Arc::new(MongoOfferingRepository::new(db));

    if categories.list(None).await?.is_empty() {
        let service = CategoryServiceImpl::new(
            categories.clone(),
            Arc::new(MongoProjectRepository::new(db)),
            products.clone(),
        );
        for request in sample_categories() {
            let created = service.create_category(request).await?;
            info!("Category seeded: {}", created.slug);
        }
    } else {
        info!("Categories already present, skipping");
    }

    let (_, services_total) = offerings.list(&OfferingFilter::default(), PageParams::default()).await?;
    if services_total == 0 {
        let service = OfferingServiceImpl::new(offerings.clone());
        for request in sample_offerings() {
            let created = service.create_offering(request).await?;
            info!("Service seeded: {}", created.slug);
        }
    } else {
        info!("Services already present, skipping");
    }

    let (_, products_total) = products.list(&ProductFilter::default(), PageParams::default()).await?;
    if products_total == 0 {
        for product in sample_products() {
            let created = products.create(product).await?;
            info!("Product seeded: {}", created.model);
        }
    } else {
        info!("Products already present, skipping");
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result: SeedResult = async {
        let mongo_config = MongoConfig::from_env()?;
        let db = mongo::connect(&mongo_config).await?;
        mongo::ensure_indexes(&db).await?;

        match cli.command {
            Command::Admin { email, password, name, editor } => seed_admin(&db, email, password, name, editor).await,
            Command::Catalog => seed_catalog(&db).await,
        }
    }
    .await;

    if let Err(e) = result {
        error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}
