use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub edition: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
}

/// One athlete's (or competing coach's) entry in a tournament, optionally
/// restricted to a single competition category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TournamentParticipation {
    pub participation_id: Uuid,
    pub tournament_id: Uuid,
    pub athlete_id: Option<Uuid>,
    pub coach_id: Option<Uuid>,
    pub category: Option<String>,
    pub performance: Option<String>,
}
