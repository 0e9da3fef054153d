use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::tournament::{
        CreateTournamentRequest, RegisterParticipationRequest, UpdateTournamentRequest,
    },
    models::{Tournament, TournamentParticipation},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments",
    responses(
        (status = 200, description = "List all tournaments", body = Vec<Tournament>)
    ),
    tag = "tournaments"
)]
pub async fn list_tournaments(State(db): State<Database>) -> WebResult<Response> {
    let tournaments = services::list_tournaments(db.pool()).await?;

    Ok(Json(tournaments).into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Tournament found", body = Tournament),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let tournament = services::get_tournament(db.pool(), id).await?;

    Ok(Json(tournament).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments",
    request_body = CreateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Tournament created successfully", body = Tournament),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments"
)]
pub async fn create_tournament(
    State(db): State<Database>,
    Json(request): Json<CreateTournamentRequest>,
) -> WebResult<Response> {
    request.validate()?;

    if request.end_date < request.start_date {
        return Err(WebError::BadRequest(
            "End date must not be before start date".to_string(),
        ));
    }

    let tournament = services::create_tournament(db.pool(), &request).await?;

    Ok((StatusCode::CREATED, Json(tournament)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = UpdateTournamentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Tournament updated successfully", body = Tournament),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn update_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTournamentRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let tournament = services::update_tournament(db.pool(), id, &request).await?;

    Ok(Json(tournament).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Tournament deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn delete_tournament(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_tournament(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{id}/participations",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    responses(
        (status = 200, description = "Participations for this tournament", body = Vec<TournamentParticipation>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn list_participations(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    let participations = services::list_participations(db.pool(), id).await?;

    Ok(Json(participations).into_response())
}

#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/participations",
    params(
        ("id" = Uuid, Path, description = "Tournament ID")
    ),
    request_body = RegisterParticipationRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Participant registered", body = TournamentParticipation),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "tournaments"
)]
pub async fn register_participation(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(request): Json<RegisterParticipationRequest>,
) -> WebResult<Response> {
    request.validate()?;

    // A participation belongs to an athlete or a competing coach, never
    // both and never neither.
    match (request.athlete_id, request.coach_id) {
        (Some(_), Some(_)) => {
            return Err(WebError::BadRequest(
                "Register either an athlete or a coach, not both".to_string(),
            ));
        }
        (None, None) => {
            return Err(WebError::BadRequest(
                "Either athlete_id or coach_id is required".to_string(),
            ));
        }
        _ => {}
    }

    let participation = services::register_participation(db.pool(), id, &request).await?;

    Ok((StatusCode::CREATED, Json(participation)).into_response())
}
