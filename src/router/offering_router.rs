use axum::{Router, routing::{get, post, put}, middleware};
use crate::handler::offering_handler::{
    list_offerings_handler,
    get_offering_handler,
    create_offering_handler,
    update_offering_handler,
    delete_offering_handler,
};
use std::sync::Arc;
use crate::service::offering_service::OfferingServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn offering_router(service: Arc<OfferingServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/services", get(list_offerings_handler))
        .route("/api/services/{slug}", get(get_offering_handler));

    let admin = Router::new()
        .route("/api/services", post(create_offering_handler))
        .route("/api/services/{slug}", put(update_offering_handler).delete(delete_offering_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
