use axum::{Router, routing::{get, post, put}, middleware};
use crate::handler::category_handler::{
    list_categories_handler,
    get_category_handler,
    create_category_handler,
    update_category_handler,
    delete_category_handler,
};
use std::sync::Arc;
use crate::service::category_service::CategoryServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn category_router(service: Arc<CategoryServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/categories", get(list_categories_handler))
        .route("/api/categories/{id}", get(get_category_handler));

    let admin = Router::new()
        .route("/api/categories", post(create_category_handler))
        .route("/api/categories/{id}", put(update_category_handler).delete(delete_category_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
