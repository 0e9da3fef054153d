use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(range(min = 1, message = "Edition must be a positive number"))]
    pub edition: i32,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "Location is required"))]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 1))]
    pub edition: Option<i32>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,
}

/// Registers an athlete or a competing coach for a tournament. Exactly one
/// of `athlete_id` / `coach_id` must be set; the handler enforces this.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterParticipationRequest {
    pub athlete_id: Option<Uuid>,
    pub coach_id: Option<Uuid>,

    #[validate(length(max = 50))]
    pub category: Option<String>,

    #[validate(length(max = 255))]
    pub performance: Option<String>,
}
