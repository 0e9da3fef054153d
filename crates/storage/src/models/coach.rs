use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A coach profile. Coaches with `is_athlete` set also compete and carry
/// the athlete-only fields (weight, category memberships).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Coach {
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
}
