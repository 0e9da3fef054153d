use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The fixed set of competition-type tags athletes register for.
pub const CATEGORY_TAGS: &[&str] = &[
    "individual_form",
    "team_form",
    "sparring",
    "team_sparring",
    "special_technique",
    "team_special_technique",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}
