use crate::util::error::HandlerError;
use validator::Validate;

pub mod project_handler;
pub mod offering_handler;
pub mod product_handler;
pub mod category_handler;
pub mod contact_handler;
pub mod booking_handler;
pub mod settings_handler;
pub mod auth_handler;

/// Run derive-validator rules and turn failures into a 400 with per-field details
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), HandlerError> {
    payload.validate().map_err(|e| HandlerError::validation(&e))
}

/// Optional enum filter from the query string; unknown values are a 400
pub fn parse_filter<T: std::str::FromStr<Err = String>>(value: Option<&str>) -> Result<Option<T>, HandlerError> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<T>().map_err(HandlerError::bad_request))
        .transpose()
}
