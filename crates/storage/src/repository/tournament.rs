use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::tournament::{
    CreateTournamentRequest, RegisterParticipationRequest, UpdateTournamentRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Tournament, TournamentParticipation};

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Tournament>> {
        let tournaments = sqlx::query_as::<_, Tournament>(
            "SELECT tournament_id, name, edition, start_date, end_date, location
             FROM tournaments
             ORDER BY start_date DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tournaments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "SELECT tournament_id, name, edition, start_date, end_date, location
             FROM tournaments
             WHERE tournament_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(tournament)
    }

    pub async fn create(&self, request: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "INSERT INTO tournaments (name, edition, start_date, end_date, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING tournament_id, name, edition, start_date, end_date, location",
        )
        .bind(&request.name)
        .bind(request.edition)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(&request.location)
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    pub async fn update(
        &self,
        existing: &Tournament,
        request: &UpdateTournamentRequest,
    ) -> Result<Tournament> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "UPDATE tournaments
             SET name = $2, edition = $3, start_date = $4, end_date = $5, location = $6
             WHERE tournament_id = $1
             RETURNING tournament_id, name, edition, start_date, end_date, location",
        )
        .bind(existing.tournament_id)
        .bind(request.name.as_ref().unwrap_or(&existing.name))
        .bind(request.edition.unwrap_or(existing.edition))
        .bind(request.start_date.unwrap_or(existing.start_date))
        .bind(request.end_date.unwrap_or(existing.end_date))
        .bind(request.location.as_ref().unwrap_or(&existing.location))
        .fetch_one(self.pool)
        .await?;

        Ok(tournament)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM tournaments WHERE tournament_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn participations(&self, tournament_id: Uuid) -> Result<Vec<TournamentParticipation>> {
        let participations = sqlx::query_as::<_, TournamentParticipation>(
            "SELECT participation_id, tournament_id, athlete_id, coach_id, category, performance
             FROM tournament_participations
             WHERE tournament_id = $1
             ORDER BY participation_id",
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participations)
    }

    pub async fn register(
        &self,
        tournament_id: Uuid,
        request: &RegisterParticipationRequest,
    ) -> Result<TournamentParticipation> {
        let participation = sqlx::query_as::<_, TournamentParticipation>(
            "INSERT INTO tournament_participations
                 (tournament_id, athlete_id, coach_id, category, performance)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING participation_id, tournament_id, athlete_id, coach_id, category, performance",
        )
        .bind(tournament_id)
        .bind(request.athlete_id)
        .bind(request.coach_id)
        .bind(&request.category)
        .bind(&request.performance)
        .fetch_one(self.pool)
        .await?;

        Ok(participation)
    }
}
