use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{id_hex, validate_budget, validate_contact_status, validate_timeline};
use crate::model::contact::{BudgetBand, Contact, ContactStatus, TimelineBand};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[validate(length(min = 2, max = 100, message = "name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 100, message = "projectType is required"))]
    pub project_type: String,
    #[validate(custom(function = "validate_budget"))]
    pub budget: String,
    #[validate(custom(function = "validate_timeline"))]
    pub timeline: String,
    #[validate(length(min = 10, max = 5000, message = "message must be between 10 and 5000 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateContactStatusRequest {
    #[validate(custom(function = "validate_contact_status"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: BudgetBand,
    pub timeline: TimelineBand,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        ContactResponse {
            id: id_hex(&c.id),
            name: c.name,
            email: c.email,
            phone: c.phone,
            company: c.company,
            project_type: c.project_type,
            budget: c.budget,
            timeline: c.timeline,
            message: c.message,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
