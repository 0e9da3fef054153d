use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::document::ConsentRecord;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "athlete_id, name, gender, dob, weight, country, club_id, belt, \
     coach_id, email, contacts, accommodation, blood_group, passport_number, \
     arrival_date, departure_date, is_active, created_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes, stable ordering by name
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes ORDER BY name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Category membership for one athlete
    pub async fn categories(&self, id: Uuid) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT c.name
             FROM athlete_categories ac
             JOIN categories c ON c.category_id = ac.category_id
             WHERE ac.athlete_id = $1
             ORDER BY c.name",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }

    /// Category membership for every athlete in one query, keyed by ID
    pub async fn categories_by_athlete(&self) -> Result<HashMap<Uuid, Vec<String>>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT ac.athlete_id, c.name
             FROM athlete_categories ac
             JOIN categories c ON c.category_id = ac.category_id
             ORDER BY ac.athlete_id, c.name",
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_athlete: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (athlete_id, name) in rows {
            by_athlete.entry(athlete_id).or_default().push(name);
        }

        Ok(by_athlete)
    }

    /// Create a new athlete together with its category memberships
    pub async fn create(&self, request: &CreateAthleteRequest) -> Result<Athlete> {
        let mut tx = self.pool.begin().await?;

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "INSERT INTO athletes (name, gender, dob, weight, country, club_id, belt, coach_id,
                                   email, contacts, accommodation, blood_group, passport_number,
                                   arrival_date, departure_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {ATHLETE_COLUMNS}"
        ))
        .bind(&request.name)
        .bind(&request.gender)
        .bind(request.dob)
        .bind(request.weight)
        .bind(&request.country)
        .bind(request.club_id)
        .bind(&request.belt)
        .bind(request.coach_id)
        .bind(&request.email)
        .bind(&request.contacts)
        .bind(&request.accommodation)
        .bind(&request.blood_group)
        .bind(&request.passport_number)
        .bind(request.arrival_date)
        .bind(request.departure_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).map_unique_violation("Athlete name already exists"))?;

        sqlx::query(
            "INSERT INTO athlete_categories (athlete_id, category_id)
             SELECT $1, category_id FROM categories WHERE name = ANY($2)
             ON CONFLICT DO NOTHING",
        )
        .bind(athlete.athlete_id)
        .bind(&request.categories)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(athlete)
    }

    /// Update an athlete, keeping existing values for fields the request
    /// leaves out. A categories value replaces the whole membership set.
    pub async fn update(
        &self,
        existing: &Athlete,
        request: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let mut tx = self.pool.begin().await?;

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "UPDATE athletes
             SET name = $2, gender = $3, dob = $4, weight = $5, country = $6, club_id = $7,
                 belt = $8, coach_id = $9, email = $10, contacts = $11, accommodation = $12,
                 blood_group = $13, passport_number = $14, arrival_date = $15,
                 departure_date = $16, is_active = $17
             WHERE athlete_id = $1
             RETURNING {ATHLETE_COLUMNS}"
        ))
        .bind(existing.athlete_id)
        .bind(request.name.as_ref().unwrap_or(&existing.name))
        .bind(request.gender.as_ref().unwrap_or(&existing.gender))
        .bind(request.dob.or(existing.dob))
        .bind(request.weight.or(existing.weight))
        .bind(request.country.as_ref().unwrap_or(&existing.country))
        .bind(request.club_id.or(existing.club_id))
        .bind(request.belt.as_ref().or(existing.belt.as_ref()))
        .bind(request.coach_id.or(existing.coach_id))
        .bind(request.email.as_ref().or(existing.email.as_ref()))
        .bind(request.contacts.as_ref().or(existing.contacts.as_ref()))
        .bind(request.accommodation.as_ref().or(existing.accommodation.as_ref()))
        .bind(request.blood_group.as_ref().or(existing.blood_group.as_ref()))
        .bind(request.passport_number.as_ref().or(existing.passport_number.as_ref()))
        .bind(request.arrival_date.or(existing.arrival_date))
        .bind(request.departure_date.or(existing.departure_date))
        .bind(request.is_active.unwrap_or(existing.is_active))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).map_unique_violation("Athlete name already exists"))?;

        if let Some(categories) = &request.categories {
            sqlx::query("DELETE FROM athlete_categories WHERE athlete_id = $1")
                .bind(athlete.athlete_id)
                .execute(&mut *tx)
                .await?;

            sqlx::query(
                "INSERT INTO athlete_categories (athlete_id, category_id)
                 SELECT $1, category_id FROM categories WHERE name = ANY($2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(athlete.athlete_id)
            .bind(categories)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(athlete)
    }

    /// Delete an athlete (memberships cascade)
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Load the read-only snapshot the consent-form mapper works from,
    /// with the coach relation already resolved to display strings.
    pub async fn consent_record(&self, id: Uuid) -> Result<ConsentRecord> {
        let row = sqlx::query_as::<_, ConsentRow>(
            "SELECT a.name, a.gender, a.dob, a.weight, a.country, a.belt,
                    co.name AS coach_name, co.belt AS coach_belt,
                    a.email, a.contacts
             FROM athletes a
             LEFT JOIN coaches co ON co.coach_id = a.coach_id
             WHERE a.athlete_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let categories = self.categories(id).await?;

        Ok(ConsentRecord {
            name: row.name,
            gender: row.gender,
            dob: row.dob,
            weight: row.weight,
            country: row.country,
            belt: row.belt,
            coach_name: row.coach_name,
            coach_belt: row.coach_belt,
            email: row.email,
            contacts: row.contacts,
            categories,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ConsentRow {
    name: String,
    gender: String,
    dob: Option<chrono::NaiveDate>,
    weight: Option<rust_decimal::Decimal>,
    country: String,
    belt: Option<String>,
    coach_name: Option<String>,
    coach_belt: Option<String>,
    email: Option<String>,
    contacts: Option<String>,
}
