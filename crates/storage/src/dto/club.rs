use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::CATEGORY_TAGS;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 100))]
    pub county: Option<String>,
}

/// Request payload for creating a team. A team competes in at most one
/// of the team category tags.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[validate(custom(function = "validate_team_category"))]
    pub category: Option<String>,
}

/// Request payload for registering an athlete on a team
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTeamMemberRequest {
    pub athlete_id: Uuid,
}

pub(crate) fn validate_team_category(category: &str) -> Result<(), validator::ValidationError> {
    if CATEGORY_TAGS.contains(&category) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("unknown_category")
            .with_message(format!("Unknown category tag: {category}").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_request_passes() {
        let request = CreateTeamRequest {
            name: "Nairobi Tigers".to_string(),
            country: Some("Kenya".to_string()),
            category: Some("team_sparring".to_string()),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_team_category_rejected() {
        let request = CreateTeamRequest {
            name: "Nairobi Tigers".to_string(),
            country: None,
            category: Some("relay".to_string()),
        };
        assert!(request.validate().is_err());
    }
}
