use axum::{Router, extract::DefaultBodyLimit, routing::{get, post}, middleware};
use crate::handler::product_handler::{
    get_products_handler,
    create_product_handler,
    update_product_handler,
    delete_product_handler,
};
use std::sync::Arc;
use crate::service::product_service::ProductServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

/// Room for one product photo plus the JSON part
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn product_router(service: Arc<ProductServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Single product and listing share the path; `?id=` selects one
    let public = Router::new()
        .route("/api/products", get(get_products_handler));

    let admin = Router::new()
        .route(
            "/api/products",
            post(create_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
