use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_consent_form;

pub fn routes() -> Router<Database> {
    Router::new().route(
        "/:tournament_id/athletes/:athlete_id/consent-form",
        get(get_consent_form),
    )
}
