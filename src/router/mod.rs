pub mod project_router;
pub mod offering_router;
pub mod product_router;
pub mod category_router;
pub mod contact_router;
pub mod booking_router;
pub mod settings_router;
pub mod auth_router;
