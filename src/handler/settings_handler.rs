use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::dto::settings_dto::{SettingsResponse, UpdateSettingsRequest};
use crate::handler::validate_payload;
use crate::service::settings_service::{SettingsService, SettingsServiceImpl};
use crate::util::error::HandlerError;

const DEFAULT_MAINTENANCE_MESSAGE: &str = "We are performing scheduled maintenance. Please check back soon.";

pub async fn get_settings_handler(
    State(service): State<Arc<SettingsServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(SettingsResponse::from(service.get_settings().await?)))
}

// Admin role only
pub async fn update_settings_handler(
    State(service): State<Arc<SettingsServiceImpl>>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    Ok(Json(SettingsResponse::from(service.update_settings(payload).await?)))
}

/// Notice served while maintenance mode is on
pub async fn maintenance_notice_handler(State(service): State<Arc<SettingsServiceImpl>>) -> impl IntoResponse {
    let message = match service.get_settings().await {
        Ok(settings) => settings
            .maintenance_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAINTENANCE_MESSAGE.to_string()),
        Err(_) => DEFAULT_MAINTENANCE_MESSAGE.to_string(),
    };
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "maintenance": true, "message": message })),
    )
}
