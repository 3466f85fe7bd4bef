use crate::config::mongo_conf::MongoConfig;
use crate::dto::pagination::PageParams;
use crate::repository::repository_error::RepositoryResult;
use bson::{doc, Document};
use futures::stream::TryStreamExt;
use mongodb::options::{ClientOptions, Credential, FindOptions, IndexOptions, ResolverConfig};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument};

pub const PROJECTS: &str = "projects";
pub const SERVICES: &str = "services";
pub const PRODUCTS: &str = "products";
pub const CATEGORIES: &str = "categories";
pub const CONTACTS: &str = "contacts";
pub const BOOKINGS: &str = "bookings";
pub const SETTINGS: &str = "settings";
pub const ADMIN_USERS: &str = "admin_users";

/// Open the client once; every repository shares the returned database handle.
#[instrument(skip(config), fields(database = %config.database))]
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some(config.app_name.clone());
    client_options.max_pool_size = Some(config.max_pool_size);
    client_options.connect_timeout = Some(std::time::Duration::from_secs(config.connect_timeout_secs));

    if let Some((username, password)) = config.credentials() {
        client_options.credential = Some(
            Credential::builder()
                .username(username.to_string())
                .password(password.to_string())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!("MongoDB client created");
    Ok(client.database(&config.database))
}

/// Unique slugs and emails, plus lookup indexes for the category guard.
#[instrument(skip(db))]
pub async fn ensure_indexes(db: &Database) -> RepositoryResult<()> {
    let unique = || IndexOptions::builder().unique(true).build();

    for (collection, field) in [(PROJECTS, "slug"), (SERVICES, "slug"), (CATEGORIES, "slug"), (ADMIN_USERS, "email")] {
        let model = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(unique())
            .build();
        db.collection::<Document>(collection)
            .create_index(model, None)
            .await
            .map_err(|e| {
                error!("Failed to create unique index on {}.{}: {}", collection, field, e);
                e
            })?;
    }

    for collection in [PROJECTS, PRODUCTS] {
        let model = IndexModel::builder().keys(doc! { "category": 1 }).build();
        db.collection::<Document>(collection).create_index(model, None).await?;
    }

    info!("MongoDB indexes ensured");
    Ok(())
}

/// One page of `filter` matches, ordered by `sort`, together with the total match count.
pub(crate) async fn find_page<T>(
    collection: &Collection<T>,
    filter: Document,
    sort: Document,
    page: PageParams,
) -> RepositoryResult<(Vec<T>, u64)>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let total = collection.count_documents(filter.clone(), None).await?;
    let options = FindOptions::builder()
        .sort(sort)
        .skip(page.skip())
        .limit(page.limit as i64)
        .build();
    let items: Vec<T> = collection.find(filter, options).await?.try_collect().await?;
    Ok((items, total))
}

/// `$set` document for a full-entity update, without the immutable `_id`
pub(crate) fn set_document<T: serde::Serialize>(entity: &T) -> RepositoryResult<Document> {
    let mut doc = bson::to_document(entity)?;
    doc.remove("_id");
    Ok(doc! { "$set": doc })
}
