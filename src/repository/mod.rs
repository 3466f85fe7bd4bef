pub mod repository_error;
pub mod mongo;
pub mod project_repo;
pub mod offering_repo;
pub mod product_repo;
pub mod category_repo;
pub mod contact_repo;
pub mod booking_repo;
pub mod settings_repo;
pub mod user_repo;
