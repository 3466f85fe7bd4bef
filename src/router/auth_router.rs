use axum::{Router, routing::{get, post}, middleware};
use crate::handler::auth_handler::{login_handler, logout_handler, me_handler, AuthHandlerState};
use std::sync::Arc;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn auth_router(state: Arc<AuthHandlerState>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/admin/auth", post(login_handler).delete(logout_handler));

    let session = Router::new()
        .route("/api/auth/me", get(me_handler))
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(session)
        .with_state(state)
}
