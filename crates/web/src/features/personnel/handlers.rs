use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::personnel::{CreateMediaRequest, CreateStaffRequest},
    models::{Media, Staff},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/personnel/staff",
    responses(
        (status = 200, description = "List all staff", body = Vec<Staff>)
    ),
    tag = "personnel"
)]
pub async fn list_staff(State(db): State<Database>) -> WebResult<Response> {
    let staff = services::list_staff(db.pool()).await?;

    Ok(Json(staff).into_response())
}

#[utoipa::path(
    post,
    path = "/api/personnel/staff",
    request_body = CreateStaffRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Staff member created", body = Staff),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "personnel"
)]
pub async fn create_staff(
    State(db): State<Database>,
    Json(request): Json<CreateStaffRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let staff = services::create_staff(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(staff)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/personnel/media",
    responses(
        (status = 200, description = "List all accredited media", body = Vec<Media>)
    ),
    tag = "personnel"
)]
pub async fn list_media(State(db): State<Database>) -> WebResult<Response> {
    let media = services::list_media(db.pool()).await?;

    Ok(Json(media).into_response())
}

#[utoipa::path(
    post,
    path = "/api/personnel/media",
    request_body = CreateMediaRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Media member created", body = Media),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "personnel"
)]
pub async fn create_media(
    State(db): State<Database>,
    Json(request): Json<CreateMediaRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let media = services::create_media(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(media)).into_response())
}
