use crate::model::now_timestamp;
use crate::model::settings::{Settings, SETTINGS_KEY};
use crate::repository::mongo::SETTINGS;
use crate::repository::repository_error::RepositoryResult;
use async_trait::async_trait;
use bson::doc;
use mongodb::options::ReplaceOptions;
use mongodb::{Collection, Database};
use tracing::{info, instrument};

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// `None` until settings are saved for the first time
    async fn get(&self) -> RepositoryResult<Option<Settings>>;
    async fn save(&self, settings: Settings) -> RepositoryResult<Settings>;
}

pub struct MongoSettingsRepository {
    collection: Collection<Settings>,
}

impl MongoSettingsRepository {
    pub fn new(db: &Database) -> Self {
        MongoSettingsRepository { collection: db.collection::<Settings>(SETTINGS) }
    }
}

#[async_trait]
impl SettingsRepository for MongoSettingsRepository {
    #[instrument(skip(self))]
    async fn get(&self) -> RepositoryResult<Option<Settings>> {
        Ok(self.collection.find_one(doc! { "_id": SETTINGS_KEY }, None).await?)
    }

    #[instrument(skip(self, settings))]
    async fn save(&self, mut settings: Settings) -> RepositoryResult<Settings> {
        settings.key = SETTINGS_KEY.to_string();
        settings.updated_at = Some(now_timestamp());
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "_id": SETTINGS_KEY }, &settings, options)
            .await?;
        info!("Site settings saved");
        Ok(settings)
    }
}
