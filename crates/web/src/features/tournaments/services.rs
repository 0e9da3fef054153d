use sqlx::PgPool;
use storage::{
    dto::tournament::{
        CreateTournamentRequest, RegisterParticipationRequest, UpdateTournamentRequest,
    },
    error::Result,
    models::{Tournament, TournamentParticipation},
    repository::tournament::TournamentRepository,
};
use uuid::Uuid;

pub async fn list_tournaments(pool: &PgPool) -> Result<Vec<Tournament>> {
    let repo = TournamentRepository::new(pool);
    repo.list().await
}

pub async fn get_tournament(pool: &PgPool, id: Uuid) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_tournament(
    pool: &PgPool,
    request: &CreateTournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    repo.create(request).await
}

pub async fn update_tournament(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateTournamentRequest,
) -> Result<Tournament> {
    let repo = TournamentRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_tournament(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = TournamentRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_participations(
    pool: &PgPool,
    tournament_id: Uuid,
) -> Result<Vec<TournamentParticipation>> {
    let repo = TournamentRepository::new(pool);
    // 404 for unknown tournaments rather than an empty list
    repo.find_by_id(tournament_id).await?;
    repo.participations(tournament_id).await
}

pub async fn register_participation(
    pool: &PgPool,
    tournament_id: Uuid,
    request: &RegisterParticipationRequest,
) -> Result<TournamentParticipation> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(tournament_id).await?;
    repo.register(tournament_id, request).await
}
