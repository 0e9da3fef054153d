use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    /// Bodyweight in kilograms, two decimal places. Absent means unknown
    /// and the athlete cannot be placed in a weight division.
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
}
