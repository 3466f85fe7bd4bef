use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::model::settings::Settings;
use crate::repository::settings_repo::SettingsRepository;
use crate::util::error::ServiceError;
use crate::util::maintenance_cache::MaintenanceCache;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Stored settings, or defaults when nothing was saved yet
    async fn get_settings(&self) -> Result<Settings, ServiceError>;
    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<Settings, ServiceError>;
    /// Maintenance flag through the TTL cache; read failures count as off
    async fn maintenance_enabled(&self) -> bool;
    /// Number used for WhatsApp hand-off: settings first, then the configured fallback
    async fn whatsapp_number(&self) -> Option<String>;
}

pub struct SettingsServiceImpl {
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub maintenance_cache: MaintenanceCache,
    pub fallback_whatsapp: Option<String>,
}

impl SettingsServiceImpl {
    pub fn new(
        settings_repo: Arc<dyn SettingsRepository>,
        maintenance_cache: MaintenanceCache,
        fallback_whatsapp: Option<String>,
    ) -> Self {
        Self { settings_repo, maintenance_cache, fallback_whatsapp }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl SettingsService for SettingsServiceImpl {
    #[instrument(skip(self))]
    async fn get_settings(&self) -> Result<Settings, ServiceError> {
        Ok(self.settings_repo.get().await?.unwrap_or_default())
    }

    #[instrument(skip(self, request))]
    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<Settings, ServiceError> {
        let mut settings = self.get_settings().await?;

        if let Some(company_name) = request.company_name {
            settings.company_name = company_name;
        }
        if request.email.is_some() {
            settings.email = request.email;
        }
        if request.phone.is_some() {
            settings.phone = request.phone;
        }
        if request.whatsapp_number.is_some() {
            settings.whatsapp_number = request.whatsapp_number;
        }
        if request.address.is_some() {
            settings.address = request.address;
        }
        if request.business_hours.is_some() {
            settings.business_hours = request.business_hours;
        }
        if request.facebook_url.is_some() {
            settings.facebook_url = request.facebook_url;
        }
        if request.instagram_url.is_some() {
            settings.instagram_url = request.instagram_url;
        }
        if request.linkedin_url.is_some() {
            settings.linkedin_url = request.linkedin_url;
        }
        if let Some(enabled) = request.maintenance_mode {
            settings.maintenance_mode = enabled;
        }
        if request.maintenance_message.is_some() {
            settings.maintenance_message = request.maintenance_message;
        }

        let saved = self.settings_repo.save(settings).await?;
        self.maintenance_cache.set(saved.maintenance_mode).await;
        info!("Settings updated (maintenance mode: {})", saved.maintenance_mode);
        Ok(saved)
    }

    async fn maintenance_enabled(&self) -> bool {
        self.maintenance_cache
            .get_or_load(|| async {
                self.settings_repo
                    .get()
                    .await
                    .map(|s| s.map(|s| s.maintenance_mode).unwrap_or(false))
            })
            .await
    }

    async fn whatsapp_number(&self) -> Option<String> {
        let stored = match self.settings_repo.get().await {
            Ok(settings) => settings.and_then(|s| non_blank(s.whatsapp_number)),
            Err(e) => {
                tracing::warn!("Could not read settings for WhatsApp number: {}", e);
                None
            }
        };
        stored.or_else(|| non_blank(self.fallback_whatsapp.clone()))
    }
}
