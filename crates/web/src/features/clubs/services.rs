use sqlx::PgPool;
use storage::{
    dto::club::{CreateClubRequest, CreateTeamRequest},
    error::Result,
    models::{Athlete, Club, Team},
    repository::club::ClubRepository,
};
use uuid::Uuid;

pub async fn list_clubs(pool: &PgPool) -> Result<Vec<Club>> {
    let repo = ClubRepository::new(pool);
    repo.list().await
}

pub async fn get_club(pool: &PgPool, id: Uuid) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.find_by_id(id).await
}

pub async fn create_club(pool: &PgPool, request: &CreateClubRequest) -> Result<Club> {
    let repo = ClubRepository::new(pool);
    repo.create(request).await
}

pub async fn delete_club(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ClubRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = ClubRepository::new(pool);
    repo.list_teams().await
}

pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = ClubRepository::new(pool);
    repo.create_team(request).await
}

pub async fn delete_team(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = ClubRepository::new(pool);
    repo.delete_team(id).await
}

pub async fn add_team_member(pool: &PgPool, team_id: Uuid, athlete_id: Uuid) -> Result<()> {
    let repo = ClubRepository::new(pool);
    repo.add_team_member(team_id, athlete_id).await
}

pub async fn list_team_members(pool: &PgPool, team_id: Uuid) -> Result<Vec<Athlete>> {
    let repo = ClubRepository::new(pool);
    repo.find_team_by_id(team_id).await?;
    repo.team_members(team_id).await
}
