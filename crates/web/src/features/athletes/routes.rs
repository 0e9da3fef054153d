use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, export_roster, get_athlete, get_roster, list_athletes,
    update_athlete,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_athlete))
        .route("/:id", put(update_athlete))
        .route("/:id", delete(delete_athlete))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_athletes))
        .route("/roster", get(get_roster))
        .route("/export", get(export_roster))
        .route("/:id", get(get_athlete))
        .merge(protected)
}
