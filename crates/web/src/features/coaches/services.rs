use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::coach::{CoachResponse, CreateCoachRequest, UpdateCoachRequest},
    error::Result,
    repository::coach::CoachRepository,
};
use uuid::Uuid;

pub async fn list_coaches(pool: &PgPool, today: NaiveDate) -> Result<Vec<CoachResponse>> {
    let repo = CoachRepository::new(pool);
    let coaches = repo.list().await?;
    let mut categories = repo.categories_by_coach().await?;

    Ok(coaches
        .into_iter()
        .map(|coach| {
            let coach_categories = categories.remove(&coach.coach_id).unwrap_or_default();
            CoachResponse::from_model(coach, coach_categories, today)
        })
        .collect())
}

pub async fn get_coach(pool: &PgPool, id: Uuid, today: NaiveDate) -> Result<CoachResponse> {
    let repo = CoachRepository::new(pool);
    let coach = repo.find_by_id(id).await?;
    let categories = repo.categories(id).await?;

    Ok(CoachResponse::from_model(coach, categories, today))
}

pub async fn create_coach(
    pool: &PgPool,
    request: &CreateCoachRequest,
    today: NaiveDate,
) -> Result<CoachResponse> {
    let repo = CoachRepository::new(pool);
    let coach = repo.create(request).await?;
    let categories = repo.categories(coach.coach_id).await?;

    Ok(CoachResponse::from_model(coach, categories, today))
}

pub async fn update_coach(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateCoachRequest,
    today: NaiveDate,
) -> Result<CoachResponse> {
    let repo = CoachRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    let coach = repo.update(&existing, request).await?;
    let categories = repo.categories(id).await?;

    Ok(CoachResponse::from_model(coach, categories, today))
}

pub async fn delete_coach(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = CoachRepository::new(pool);
    repo.delete(id).await
}
