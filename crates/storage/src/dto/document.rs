use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Read-only snapshot of an athlete handed to the document field mapper.
/// Relations (coach, belt) are already resolved to display strings so the
/// mapper stays a pure transformation with no storage access.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConsentRecord {
    pub name: String,
    pub gender: String,
    pub dob: Option<NaiveDate>,
    pub weight: Option<Decimal>,
    pub country: String,
    pub belt: Option<String>,
    pub coach_name: Option<String>,
    pub coach_belt: Option<String>,
    pub email: Option<String>,
    pub contacts: Option<String>,
    pub categories: Vec<String>,
}

/// Placeholder → value map for one consent form, ready for an external
/// fill step.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConsentFormResponse {
    pub tournament_id: Uuid,
    pub athlete_id: Uuid,
    pub values: BTreeMap<String, String>,
}
