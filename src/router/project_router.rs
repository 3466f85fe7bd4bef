use axum::{Router, routing::{get, post, put}, middleware};
use crate::handler::project_handler::{
    list_projects_handler,
    get_project_handler,
    create_project_handler,
    update_project_handler,
    delete_project_handler,
};
use std::sync::Arc;
use crate::service::project_service::ProjectServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn project_router(service: Arc<ProjectServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/projects", get(list_projects_handler))
        .route("/api/projects/{slug}", get(get_project_handler));

    let admin = Router::new()
        .route("/api/projects", post(create_project_handler))
        .route(
            "/api/projects/{slug}",
            put(update_project_handler).delete(delete_project_handler),
        )
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
