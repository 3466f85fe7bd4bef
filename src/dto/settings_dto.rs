use serde::{Deserialize, Serialize};
use crate::model::settings::Settings;
use validator::Validate;

/// Partial settings update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 30))]
    pub whatsapp_number: Option<String>,
    #[validate(length(max = 300))]
    pub address: Option<String>,
    pub business_hours: Option<String>,
    #[validate(url)]
    pub facebook_url: Option<String>,
    #[validate(url)]
    pub instagram_url: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    pub maintenance_mode: Option<bool>,
    #[validate(length(max = 1000))]
    pub maintenance_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub company_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp_number: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub maintenance_mode: bool,
    pub maintenance_message: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Settings> for SettingsResponse {
    fn from(s: Settings) -> Self {
        SettingsResponse {
            company_name: s.company_name,
            email: s.email,
            phone: s.phone,
            whatsapp_number: s.whatsapp_number,
            address: s.address,
            business_hours: s.business_hours,
            facebook_url: s.facebook_url,
            instagram_url: s.instagram_url,
            linkedin_url: s.linkedin_url,
            maintenance_mode: s.maintenance_mode,
            maintenance_message: s.maintenance_message,
            updated_at: s.updated_at,
        }
    }
}
