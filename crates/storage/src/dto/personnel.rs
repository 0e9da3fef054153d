use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::athlete::validate_gender;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(length(min = 1, max = 50, message = "Passport number is required"))]
    pub passport_number: String,

    #[validate(length(min = 1, max = 100, message = "Role is required"))]
    pub role: String,

    #[validate(length(min = 1, max = 100, message = "Contacts are required"))]
    pub contacts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(length(min = 1, max = 50, message = "Passport number is required"))]
    pub passport_number: String,

    #[validate(length(min = 1, max = 100, message = "Role is required"))]
    pub role: String,

    #[validate(length(min = 1, max = 100, message = "Contacts are required"))]
    pub contacts: String,

    #[validate(length(min = 1, max = 100, message = "Media house is required"))]
    pub media_house: String,
}
