use axum::{Router, routing::{get, put}, middleware};
use crate::handler::settings_handler::{get_settings_handler, update_settings_handler, maintenance_notice_handler};
use crate::middlewares::maintenance_middleware::MAINTENANCE_PATH;
use std::sync::Arc;
use crate::service::settings_service::SettingsServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

/// `admin_role_state` must require the `admin` role; editors cannot change settings.
pub fn settings_router(service: Arc<SettingsServiceImpl>, admin_role_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/settings", get(get_settings_handler))
        .route(MAINTENANCE_PATH, get(maintenance_notice_handler));

    let admin = Router::new()
        .route("/api/settings", put(update_settings_handler))
        .route_layer(middleware::from_fn_with_state(admin_role_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
