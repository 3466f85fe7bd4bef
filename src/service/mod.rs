use crate::repository::category_repo::CategoryRepository;
use crate::util::error::ServiceError;
use crate::util::slug::slugify;
use bson::oid::ObjectId;

pub mod project_service;
pub mod offering_service;
pub mod product_service;
pub mod category_service;
pub mod contact_service;
pub mod booking_service;
pub mod settings_service;
pub mod notification;
pub mod auth_service;

/// Slug for a new or renamed document: the explicit one if given, else derived from `source`.
pub fn resolve_slug(explicit: Option<&str>, source: &str) -> Result<String, ServiceError> {
    let slug = slugify(explicit.unwrap_or(source));
    if slug.is_empty() {
        return Err(ServiceError::InvalidInput(
            "slug must contain at least one letter or digit".to_string(),
        ));
    }
    Ok(slug)
}

/// Category reference as stored on projects and products: the slug of an
/// existing category. Names are accepted and slugified first.
pub async fn resolve_category(categories: &dyn CategoryRepository, raw: &str) -> Result<String, ServiceError> {
    let slug = slugify(raw);
    if slug.is_empty() {
        return Err(ServiceError::InvalidInput("category must not be empty".to_string()));
    }
    match categories.find_by_slug(&slug).await? {
        Some(_) => Ok(slug),
        None => Err(ServiceError::InvalidInput(format!("Unknown category: '{}'", raw))),
    }
}

pub fn parse_object_id(id: &str, what: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(id).map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id: {}", what, id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(resolve_slug(Some("Custom Slug"), "Title").unwrap(), "custom-slug");
        assert_eq!(resolve_slug(None, "Solar Heaters").unwrap(), "solar-heaters");
        assert!(resolve_slug(None, "???").is_err());
    }

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("65f1a2b3c4d5e6f708192a3b", "product").is_ok());
        assert_eq!(
            parse_object_id("nope", "product").unwrap_err(),
            ServiceError::InvalidInput("Invalid product id: nope".to_string())
        );
    }
}
