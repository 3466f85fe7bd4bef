use std::borrow::Cow;
use std::str::FromStr;
use validator::ValidationError;

use crate::model::booking::BookingStatus;
use crate::model::category::CategoryType;
use crate::model::contact::{BudgetBand, ContactStatus, TimelineBand};
use crate::model::project::ProjectStatus;
use crate::util::slug::is_valid_slug;

pub mod pagination;
pub mod project_dto;
pub mod offering_dto;
pub mod product_dto;
pub mod category_dto;
pub mod contact_dto;
pub mod booking_dto;
pub mod settings_dto;
pub mod auth_dto;

fn one_of<T: FromStr<Err = String>>(value: &str, code: &'static str) -> Result<(), ValidationError> {
    T::from_str(value).map(|_| ()).map_err(|msg| {
        let mut err = ValidationError::new(code);
        err.message = Some(Cow::Owned(msg));
        err
    })
}

pub fn validate_project_status(value: &str) -> Result<(), ValidationError> {
    one_of::<ProjectStatus>(value, "project_status")
}

pub fn validate_contact_status(value: &str) -> Result<(), ValidationError> {
    one_of::<ContactStatus>(value, "contact_status")
}

pub fn validate_budget(value: &str) -> Result<(), ValidationError> {
    one_of::<BudgetBand>(value, "budget")
}

pub fn validate_timeline(value: &str) -> Result<(), ValidationError> {
    one_of::<TimelineBand>(value, "timeline")
}

pub fn validate_booking_status(value: &str) -> Result<(), ValidationError> {
    one_of::<BookingStatus>(value, "booking_status")
}

pub fn validate_category_type(value: &str) -> Result<(), ValidationError> {
    one_of::<CategoryType>(value, "category_type")
}

/// Explicit slugs must survive `slugify` with something left.
pub fn validate_slug_input(value: &str) -> Result<(), ValidationError> {
    if is_valid_slug(&crate::util::slug::slugify(value)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug");
        err.message = Some(Cow::Borrowed("slug must contain at least one letter or digit"));
        Err(err)
    }
}

/// `YYYY-MM-DD`
pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            let mut err = ValidationError::new("date");
            err.message = Some(Cow::Borrowed("expected a date formatted as YYYY-MM-DD"));
            err
        })
}

/// Parse a value that already passed its validator; a failure here is still a bad request.
pub fn parse_enum<T: FromStr<Err = String>>(value: &str) -> Result<T, crate::util::error::ServiceError> {
    value.parse::<T>().map_err(crate::util::error::ServiceError::InvalidInput)
}

/// Hex form of a document id, empty for documents not yet stored
pub fn id_hex(id: &Option<bson::oid::ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}
