use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Athlete, CATEGORY_TAGS};
use crate::services::classification::{classify_weight_division, compute_age};

/// Athlete response with the derived values every roster page needs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub name: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    pub weight: Option<Decimal>,
    pub country: String,
    pub club_id: Option<Uuid>,
    pub belt: Option<String>,
    pub coach_id: Option<Uuid>,
    pub email: Option<String>,
    pub contacts: Option<String>,
    pub accommodation: Option<String>,
    pub blood_group: Option<String>,
    pub passport_number: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub categories: Vec<String>,
    /// Age in whole years at the time of the request; absent when the date
    /// of birth is unknown.
    pub age: Option<i32>,
    pub weight_division: String,
}

impl AthleteResponse {
    pub fn from_model(athlete: Athlete, categories: Vec<String>, today: NaiveDate) -> Self {
        let age = athlete.dob.and_then(|dob| compute_age(dob, today).ok());
        let weight_division = match age {
            Some(age) => classify_weight_division(&athlete.gender, age, athlete.weight),
            None => crate::services::classification::UNKNOWN_CATEGORY,
        }
        .to_string();

        Self {
            athlete_id: athlete.athlete_id,
            name: athlete.name,
            gender: athlete.gender,
            dob: athlete.dob,
            weight: athlete.weight,
            country: athlete.country,
            club_id: athlete.club_id,
            belt: athlete.belt,
            coach_id: athlete.coach_id,
            email: athlete.email,
            contacts: athlete.contacts,
            accommodation: athlete.accommodation,
            blood_group: athlete.blood_group,
            passport_number: athlete.passport_number,
            arrival_date: athlete.arrival_date,
            departure_date: athlete.departure_date,
            is_active: athlete.is_active,
            created_at: athlete.created_at,
            categories,
            age,
            weight_division,
        }
    }
}

/// One row of the combined roster (athletes plus coaches who compete).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RosterEntry {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    pub weight: Option<Decimal>,
    pub country: String,
    pub belt: Option<String>,
    pub contacts: Option<String>,
    pub accommodation: Option<String>,
    pub categories: Vec<String>,
    pub age: Option<i32>,
    pub weight_division: String,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    pub dob: Option<NaiveDate>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(length(min = 1, max = 100, message = "Country is required"))]
    pub country: String,

    pub club_id: Option<Uuid>,

    #[validate(length(max = 100))]
    pub belt: Option<String>,

    pub coach_id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub contacts: Option<String>,

    #[validate(length(max = 100))]
    pub accommodation: Option<String>,

    #[validate(custom(function = "validate_blood_group"))]
    pub blood_group: Option<String>,

    #[validate(length(max = 50))]
    pub passport_number: Option<String>,

    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_categories"))]
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Request payload for updating an existing athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,

    pub club_id: Option<Uuid>,

    #[validate(length(max = 100))]
    pub belt: Option<String>,

    pub coach_id: Option<Uuid>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub contacts: Option<String>,

    #[validate(length(max = 100))]
    pub accommodation: Option<String>,

    #[validate(custom(function = "validate_blood_group"))]
    pub blood_group: Option<String>,

    #[validate(length(max = 50))]
    pub passport_number: Option<String>,

    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,

    pub is_active: Option<bool>,

    #[validate(custom(function = "validate_categories"))]
    pub categories: Option<Vec<String>>,
}

// Validation helpers

pub(crate) fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["Male", "Female", "Other"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender")
            .with_message("Gender must be one of: Male, Female, Other".into()))
    }
}

pub(crate) fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if weight.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_weight")
            .with_message("Weight must not be negative".into()));
    }
    Ok(())
}

pub(crate) fn validate_blood_group(blood_group: &str) -> Result<(), validator::ValidationError> {
    const VALID_BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

    if VALID_BLOOD_GROUPS.contains(&blood_group) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_blood_group"))
    }
}

pub(crate) fn validate_categories(categories: &Vec<String>) -> Result<(), validator::ValidationError> {
    for category in categories {
        if !CATEGORY_TAGS.contains(&category.as_str()) {
            return Err(validator::ValidationError::new("unknown_category")
                .with_message(format!("Unknown category tag: {category}").into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Jane Mary Doe".to_string(),
            gender: "Female".to_string(),
            dob: NaiveDate::from_ymd_opt(1998, 3, 7),
            weight: Some(dec!(62.5)),
            country: "Kenya".to_string(),
            club_id: None,
            belt: None,
            coach_id: None,
            email: Some("jane@example.com".to_string()),
            contacts: None,
            accommodation: None,
            blood_group: Some("O+".to_string()),
            passport_number: None,
            arrival_date: None,
            departure_date: None,
            categories: vec!["sparring".to_string()],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_gender_whitelist() {
        let mut request = base_request();
        request.gender = "F".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut request = base_request();
        request.weight = Some(dec!(-1));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_category_tag_rejected() {
        let mut request = base_request();
        request.categories = vec!["breakdancing".to_string()];
        assert!(request.validate().is_err());
    }
}
