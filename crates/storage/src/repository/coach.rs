use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::coach::{CreateCoachRequest, UpdateCoachRequest};
use crate::error::{Result, StorageError};
use crate::models::Coach;

const COACH_COLUMNS: &str = "coach_id, name, gender, dob, level, belt, is_athlete, weight, \
     country, club_id, email, contacts, accommodation, created_at";

pub struct CoachRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoachRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Coach>> {
        let coaches = sqlx::query_as::<_, Coach>(&format!(
            "SELECT {COACH_COLUMNS} FROM coaches ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(coaches)
    }

    /// Coaches who also compete; these join athletes on the roster.
    pub async fn list_competing(&self) -> Result<Vec<Coach>> {
        let coaches = sqlx::query_as::<_, Coach>(&format!(
            "SELECT {COACH_COLUMNS} FROM coaches WHERE is_athlete ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(coaches)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(&format!(
            "SELECT {COACH_COLUMNS} FROM coaches WHERE coach_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(coach)
    }

    pub async fn categories(&self, id: Uuid) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT c.name
             FROM coach_categories cc
             JOIN categories c ON c.category_id = cc.category_id
             WHERE cc.coach_id = $1
             ORDER BY c.name",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }

    pub async fn categories_by_coach(&self) -> Result<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT cc.coach_id, c.name
             FROM coach_categories cc
             JOIN categories c ON c.category_id = cc.category_id
             ORDER BY cc.coach_id, c.name",
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_coach: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (coach_id, name) in rows {
            by_coach.entry(coach_id).or_default().push(name);
        }

        Ok(by_coach)
    }

    pub async fn create(&self, request: &CreateCoachRequest) -> Result<Coach> {
        let mut tx = self.pool.begin().await?;

        let coach = sqlx::query_as::<_, Coach>(&format!(
            "INSERT INTO coaches (name, gender, dob, level, belt, is_athlete, weight, country,
                                  club_id, email, contacts, accommodation)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COACH_COLUMNS}"
        ))
        .bind(&request.name)
        .bind(&request.gender)
        .bind(request.dob)
        .bind(&request.level)
        .bind(&request.belt)
        .bind(request.is_athlete)
        .bind(request.weight)
        .bind(&request.country)
        .bind(request.club_id)
        .bind(&request.email)
        .bind(&request.contacts)
        .bind(&request.accommodation)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).map_unique_violation("Coach name already exists"))?;

        sqlx::query(
            "INSERT INTO coach_categories (coach_id, category_id)
             SELECT $1, category_id FROM categories WHERE name = ANY($2)
             ON CONFLICT DO NOTHING",
        )
        .bind(coach.coach_id)
        .bind(&request.categories)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(coach)
    }

    pub async fn update(&self, existing: &Coach, request: &UpdateCoachRequest) -> Result<Coach> {
        let mut tx = self.pool.begin().await?;

        let coach = sqlx::query_as::<_, Coach>(&format!(
            "UPDATE coaches
             SET name = $2, gender = $3, dob = $4, level = $5, belt = $6, is_athlete = $7,
                 weight = $8, country = $9, club_id = $10, email = $11, contacts = $12,
                 accommodation = $13
             WHERE coach_id = $1
             RETURNING {COACH_COLUMNS}"
        ))
        .bind(existing.coach_id)
        .bind(request.name.as_ref().unwrap_or(&existing.name))
        .bind(request.gender.as_ref().unwrap_or(&existing.gender))
        .bind(request.dob.or(existing.dob))
        .bind(request.level.as_ref().or(existing.level.as_ref()))
        .bind(request.belt.as_ref().or(existing.belt.as_ref()))
        .bind(request.is_athlete.unwrap_or(existing.is_athlete))
        .bind(request.weight.or(existing.weight))
        .bind(request.country.as_ref().unwrap_or(&existing.country))
        .bind(request.club_id.or(existing.club_id))
        .bind(request.email.as_ref().or(existing.email.as_ref()))
        .bind(request.contacts.as_ref().or(existing.contacts.as_ref()))
        .bind(request.accommodation.as_ref().or(existing.accommodation.as_ref()))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).map_unique_violation("Coach name already exists"))?;

        if let Some(categories) = &request.categories {
            sqlx::query("DELETE FROM coach_categories WHERE coach_id = $1")
                .bind(coach.coach_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                "INSERT INTO coach_categories (coach_id, category_id)
                 SELECT $1, category_id FROM categories WHERE name = ANY($2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(coach.coach_id)
            .bind(categories)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(coach)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM coaches WHERE coach_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
