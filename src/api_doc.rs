use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "steam-proxy API",
        version = "1.0.0",
        description = "Read-only proxy to the Steam Web API that keeps the API key on the server"
    ),
    paths(
        handlers::health::health_handler,
        handlers::games::games_handler,
        handlers::achievements::achievements_handler,
        handlers::schema::achievement_schema_handler,
        handlers::schema::fetch_schema_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "steam", description = "Steam Web API passthrough")
    )
)]
pub struct ApiDoc;
