use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::club::{CreateClubRequest, CreateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Club, Team};

pub struct ClubRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClubRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Club>> {
        let clubs = sqlx::query_as::<_, Club>(
            "SELECT club_id, name, county, joined_date FROM clubs ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(clubs)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            "SELECT club_id, name, county, joined_date FROM clubs WHERE club_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(club)
    }

    pub async fn create(&self, request: &CreateClubRequest) -> Result<Club> {
        let club = sqlx::query_as::<_, Club>(
            "INSERT INTO clubs (name, county)
             VALUES ($1, $2)
             RETURNING club_id, name, county, joined_date",
        )
        .bind(&request.name)
        .bind(&request.county)
        .fetch_one(self.pool)
        .await?;

        Ok(club)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM clubs WHERE club_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, country, category FROM teams ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_team_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT team_id, name, country, category FROM teams WHERE team_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (name, country, category)
             VALUES ($1, $2, $3)
             RETURNING team_id, name, country, category",
        )
        .bind(&request.name)
        .bind(&request.country)
        .bind(&request.category)
        .fetch_one(self.pool)
        .await?;

        Ok(team)
    }

    /// Delete a team (memberships cascade)
    pub async fn delete_team(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Register an athlete on a team. An unknown team or athlete surfaces
    /// as NotFound, a repeated registration as a constraint violation.
    pub async fn add_team_member(&self, team_id: Uuid, athlete_id: Uuid) -> Result<()> {
        sqlx::query("INSERT INTO team_members (team_id, athlete_id) VALUES ($1, $2)")
            .bind(team_id)
            .bind(athlete_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    return StorageError::NotFound;
                }
                err.map_unique_violation("Athlete is already on this team")
            })?;

        Ok(())
    }

    pub async fn team_members(&self, team_id: Uuid) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            "SELECT a.athlete_id, a.name, a.gender, a.dob, a.weight, a.country, a.club_id,
                    a.belt, a.coach_id, a.email, a.contacts, a.accommodation, a.blood_group,
                    a.passport_number, a.arrival_date, a.departure_date, a.is_active, a.created_at
             FROM team_members tm
             JOIN athletes a ON a.athlete_id = tm.athlete_id
             WHERE tm.team_id = $1
             ORDER BY a.name",
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }
}
