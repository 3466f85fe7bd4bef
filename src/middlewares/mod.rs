pub mod admin_middleware;
pub mod maintenance_middleware;
