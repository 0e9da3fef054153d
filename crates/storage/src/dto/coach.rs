use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::athlete::{validate_categories, validate_gender, validate_weight};
use crate::models::Coach;
use crate::services::classification::{UNKNOWN_CATEGORY, classify_weight_division, compute_age};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoachResponse {
    pub coach_id: Uuid,
    pub name: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    pub level: Option<String>,
    pub belt: Option<String>,
    pub is_athlete: bool,
    pub weight: Option<Decimal>,
    pub country: String,
    pub club_id: Option<Uuid>,
    pub email: Option<String>,
    pub contacts: Option<String>,
    pub accommodation: Option<String>,
    pub created_at: NaiveDateTime,
    pub categories: Vec<String>,
    pub age: Option<i32>,
    /// Only meaningful for coaches who also compete; everyone else is
    /// reported as unclassified.
    pub weight_division: String,
}

impl CoachResponse {
    pub fn from_model(coach: Coach, categories: Vec<String>, today: NaiveDate) -> Self {
        let age = coach.dob.and_then(|dob| compute_age(dob, today).ok());
        let weight_division = match (coach.is_athlete, age) {
            (true, Some(age)) => classify_weight_division(&coach.gender, age, coach.weight),
            _ => UNKNOWN_CATEGORY,
        }
        .to_string();

        Self {
            coach_id: coach.coach_id,
            name: coach.name,
            gender: coach.gender,
            dob: coach.dob,
            level: coach.level,
            belt: coach.belt,
            is_athlete: coach.is_athlete,
            weight: coach.weight,
            country: coach.country,
            club_id: coach.club_id,
            email: coach.email,
            contacts: coach.contacts,
            accommodation: coach.accommodation,
            created_at: coach.created_at,
            categories,
            age,
            weight_division,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCoachRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    pub dob: Option<NaiveDate>,

    #[validate(custom(function = "validate_level"))]
    pub level: Option<String>,

    #[validate(length(max = 100))]
    pub belt: Option<String>,

    #[serde(default)]
    pub is_athlete: bool,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(length(min = 1, max = 100, message = "Country is required"))]
    pub country: String,

    pub club_id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub contacts: Option<String>,

    #[validate(length(max = 100))]
    pub accommodation: Option<String>,

    #[validate(custom(function = "validate_categories"))]
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCoachRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(custom(function = "validate_level"))]
    pub level: Option<String>,

    #[validate(length(max = 100))]
    pub belt: Option<String>,

    pub is_athlete: Option<bool>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,

    pub club_id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub contacts: Option<String>,

    #[validate(length(max = 100))]
    pub accommodation: Option<String>,

    #[validate(custom(function = "validate_categories"))]
    pub categories: Option<Vec<String>>,
}

fn validate_level(level: &str) -> Result<(), validator::ValidationError> {
    const VALID_LEVELS: &[&str] = &["Assistant", "Head", "Senior"];

    if VALID_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_level")
            .with_message("Level must be one of: Assistant, Head, Senior".into()))
    }
}
