use axum::{Router, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const GAMES: &str = "/api/games";
pub const ACHIEVEMENTS: &str = "/api/achievements";
pub const ACHIEVEMENT_SCHEMA: &str = "/api/achievement-schema";
pub const FETCH_SCHEMA: &str = "/api/fetch-schema";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Any origin, method and header, with credentials allowed.
///
/// Wildcards cannot be combined with credentials, so the request values are
/// mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(GAMES, get(handlers::games_handler))
        .route(ACHIEVEMENTS, get(handlers::achievements_handler))
        .route(ACHIEVEMENT_SCHEMA, get(handlers::achievement_schema_handler))
        .route(FETCH_SCHEMA, get(handlers::fetch_schema_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
