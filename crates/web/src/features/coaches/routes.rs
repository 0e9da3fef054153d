use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_coach, delete_coach, get_coach, list_coaches, update_coach};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_coach))
        .route("/:id", put(update_coach))
        .route("/:id", delete(delete_coach))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_coaches))
        .route("/:id", get(get_coach))
        .merge(protected)
}
