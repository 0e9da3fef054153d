use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Staff {
    pub staff_id: Uuid,
    pub name: String,
    pub gender: String,
    pub passport_number: String,
    pub role: String,
    pub contacts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Media {
    pub media_id: Uuid,
    pub name: String,
    pub gender: String,
    pub passport_number: String,
    pub role: String,
    pub contacts: String,
    pub media_house: String,
}
