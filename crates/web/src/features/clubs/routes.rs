use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    add_team_member, create_club, create_team, delete_club, delete_team, get_club,
    list_clubs, list_team_members, list_teams,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_club))
        .route("/teams", post(create_team))
        .route("/teams/:id", delete(delete_team))
        .route("/teams/:id/members", post(add_team_member))
        .route("/:id", delete(delete_club))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_clubs))
        .route("/teams", get(list_teams))
        .route("/teams/:id/members", get(list_team_members))
        .route("/:id", get(get_club))
        .merge(protected)
}
