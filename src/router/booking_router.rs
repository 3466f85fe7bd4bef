use axum::{Router, routing::{get, post}, middleware};
use crate::handler::booking_handler::{
    submit_booking_handler,
    list_bookings_handler,
    update_booking_status_handler,
    delete_booking_handler,
};
use std::sync::Arc;
use crate::service::booking_service::BookingServiceImpl;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};

pub fn booking_router(service: Arc<BookingServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let public = Router::new()
        .route("/api/bookings", post(submit_booking_handler));

    let admin = Router::new()
        .route(
            "/api/bookings",
            get(list_bookings_handler)
                .put(update_booking_status_handler)
                .delete(delete_booking_handler),
        )
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth));

    public
        .merge(admin)
        .with_state(service)
}
