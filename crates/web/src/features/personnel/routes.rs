use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_media, create_staff, list_media, list_staff};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/staff", post(create_staff))
        .route("/media", post(create_media))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/staff", get(list_staff))
        .route("/media", get(list_media))
        .merge(protected)
}
