use serde::{Deserialize, Serialize};

/// Key of the single settings document
pub const SETTINGS_KEY: &str = "site";

/// Company info and site switches (singleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(rename = "_id")]
    pub key: String,
    pub company_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp_number: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub maintenance_mode: bool,
    pub maintenance_message: Option<String>,
    pub updated_at: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            key: SETTINGS_KEY.to_string(),
            company_name: String::new(),
            email: None,
            phone: None,
            whatsapp_number: None,
            address: None,
            business_hours: None,
            facebook_url: None,
            instagram_url: None,
            linkedin_url: None,
            maintenance_mode: false,
            maintenance_message: None,
            updated_at: None,
        }
    }
}
