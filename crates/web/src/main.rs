use anyhow::Context;
use axum::{Extension, Router};
use storage::Database;
use storage::services::documents::FieldMapping;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use features::documents::services::TemplateFields;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::get_roster,
        features::athletes::handlers::export_roster,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::coaches::handlers::list_coaches,
        features::coaches::handlers::get_coach,
        features::coaches::handlers::create_coach,
        features::coaches::handlers::update_coach,
        features::coaches::handlers::delete_coach,
        features::clubs::handlers::list_clubs,
        features::clubs::handlers::get_club,
        features::clubs::handlers::create_club,
        features::clubs::handlers::delete_club,
        features::clubs::handlers::list_teams,
        features::clubs::handlers::create_team,
        features::clubs::handlers::delete_team,
        features::clubs::handlers::add_team_member,
        features::clubs::handlers::list_team_members,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::tournaments::handlers::list_participations,
        features::tournaments::handlers::register_participation,
        features::personnel::handlers::list_staff,
        features::personnel::handlers::create_staff,
        features::personnel::handlers::list_media,
        features::personnel::handlers::create_media,
        features::documents::handlers::get_consent_form,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::RosterEntry,
            storage::dto::coach::CreateCoachRequest,
            storage::dto::coach::UpdateCoachRequest,
            storage::dto::coach::CoachResponse,
            storage::dto::club::CreateClubRequest,
            storage::dto::club::CreateTeamRequest,
            storage::dto::club::AddTeamMemberRequest,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::RegisterParticipationRequest,
            storage::dto::personnel::CreateStaffRequest,
            storage::dto::personnel::CreateMediaRequest,
            storage::dto::document::ConsentRecord,
            storage::dto::document::ConsentFormResponse,
            storage::models::Athlete,
            storage::models::Coach,
            storage::models::Club,
            storage::models::Team,
            storage::models::Tournament,
            storage::models::TournamentParticipation,
            storage::models::Category,
            storage::models::Staff,
            storage::models::Media,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration and roster endpoints"),
        (name = "coaches", description = "Coach registration endpoints"),
        (name = "clubs", description = "Club and team endpoints"),
        (name = "tournaments", description = "Tournament and participation endpoints"),
        (name = "personnel", description = "Staff and media accreditation endpoints"),
        (name = "documents", description = "Consent-form document endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting federation registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    let template_fields = TemplateFields::from_config(
        config.template_fields.as_deref(),
        &FieldMapping::consent_form(),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/athletes", features::athletes::routes::routes(api_keys.clone()))
        .nest("/api/coaches", features::coaches::routes::routes(api_keys.clone()))
        .nest("/api/clubs", features::clubs::routes::routes(api_keys.clone()))
        .nest(
            "/api/tournaments",
            features::tournaments::routes::routes(api_keys.clone())
                .merge(features::documents::routes::routes()),
        )
        .nest("/api/personnel", features::personnel::routes::routes(api_keys))
        .layer(Extension(template_fields))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
