pub mod jwt;
pub mod minio;
pub mod password;
pub mod email;
pub mod logger;
pub mod error;
pub mod slug;
pub mod whatsapp;
pub mod maintenance_cache;
