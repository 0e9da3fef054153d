use sqlx::PgPool;

use crate::dto::personnel::{CreateMediaRequest, CreateStaffRequest};
use crate::error::{Result, StorageError};
use crate::models::{Media, Staff};

pub struct PersonnelRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonnelRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_staff(&self) -> Result<Vec<Staff>> {
        let staff = sqlx::query_as::<_, Staff>(
            "SELECT staff_id, name, gender, passport_number, role, contacts
             FROM staff
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(staff)
    }

    pub async fn create_staff(&self, request: &CreateStaffRequest) -> Result<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            "INSERT INTO staff (name, gender, passport_number, role, contacts)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING staff_id, name, gender, passport_number, role, contacts",
        )
        .bind(&request.name)
        .bind(&request.gender)
        .bind(&request.passport_number)
        .bind(&request.role)
        .bind(&request.contacts)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).map_unique_violation("Passport number already registered")
        })?;

        Ok(staff)
    }

    pub async fn list_media(&self) -> Result<Vec<Media>> {
        let media = sqlx::query_as::<_, Media>(
            "SELECT media_id, name, gender, passport_number, role, contacts, media_house
             FROM media
             ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(media)
    }

    pub async fn create_media(&self, request: &CreateMediaRequest) -> Result<Media> {
        let media = sqlx::query_as::<_, Media>(
            "INSERT INTO media (name, gender, passport_number, role, contacts, media_house)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING media_id, name, gender, passport_number, role, contacts, media_house",
        )
        .bind(&request.name)
        .bind(&request.gender)
        .bind(&request.passport_number)
        .bind(&request.role)
        .bind(&request.contacts)
        .bind(&request.media_house)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).map_unique_violation("Passport number already registered")
        })?;

        Ok(media)
    }
}
