use sqlx::PgPool;
use storage::{
    dto::personnel::{CreateMediaRequest, CreateStaffRequest},
    error::Result,
    models::{Media, Staff},
    repository::personnel::PersonnelRepository,
};

pub async fn list_staff(pool: &PgPool) -> Result<Vec<Staff>> {
    let repo = PersonnelRepository::new(pool);
    repo.list_staff().await
}

pub async fn create_staff(pool: &PgPool, request: &CreateStaffRequest) -> Result<Staff> {
    let repo = PersonnelRepository::new(pool);
    repo.create_staff(request).await
}

pub async fn list_media(pool: &PgPool) -> Result<Vec<Media>> {
    let repo = PersonnelRepository::new(pool);
    repo.list_media().await
}

pub async fn create_media(pool: &PgPool, request: &CreateMediaRequest) -> Result<Media> {
    let repo = PersonnelRepository::new(pool);
    repo.create_media(request).await
}
