use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{Database, dto::document::ConsentFormResponse, services::documents::FieldMapping};
use uuid::Uuid;

use crate::error::WebResult;

use super::services::{self, TemplateFields};

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/athletes/{athlete_id}/consent-form",
    params(
        ("tournament_id" = Uuid, Path, description = "Tournament ID"),
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "Placeholder values for the consent form", body = ConsentFormResponse),
        (status = 400, description = "Athlete record is missing a required field"),
        (status = 404, description = "Tournament or athlete not found"),
        (status = 422, description = "Template does not declare all required placeholders")
    ),
    tag = "documents"
)]
pub async fn get_consent_form(
    State(db): State<Database>,
    Extension(template): Extension<TemplateFields>,
    Path((tournament_id, athlete_id)): Path<(Uuid, Uuid)>,
) -> WebResult<Response> {
    let today = Utc::now().date_naive();
    let mapping = FieldMapping::consent_form();

    let form = services::consent_form(
        db.pool(),
        tournament_id,
        athlete_id,
        today,
        &mapping,
        &template,
    )
    .await?;

    Ok(Json(form).into_response())
}
