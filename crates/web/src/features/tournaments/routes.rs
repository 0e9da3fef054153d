use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_tournament, delete_tournament, get_tournament, list_participations, list_tournaments,
    register_participation, update_tournament,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_tournament))
        .route("/:id", put(update_tournament))
        .route("/:id", delete(delete_tournament))
        .route("/:id/participations", post(register_participation))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_tournaments))
        .route("/:id", get(get_tournament))
        .route("/:id/participations", get(list_participations))
        .merge(protected)
}
