use crate::error::{ApiError, ErrorResponse, MISSING_API_KEY};
use crate::models::{AchievementSchemaQuery, FetchSchemaQuery};
use crate::routes;
use crate::state::AppState;
use crate::steam::UpstreamBody;
use axum::extract::{rejection::QueryRejection, Query, State};

/// GET /api/achievement-schema handler - Achievement schema for one game
///
/// Uses the caller's `key` when given, the server key otherwise.
#[utoipa::path(
    get,
    path = routes::ACHIEVEMENT_SCHEMA,
    params(
        ("appid" = u32, Query, description = "Steam application id"),
        ("key" = Option<String>, Query, description = "Steam Web API key overriding the server key")
    ),
    responses(
        (status = 200, description = "Steam GetSchemaForGame response, relayed verbatim"),
        (status = 400, description = "Missing or non-integer appid", body = ErrorResponse),
        (status = 500, description = "No key given and STEAM_API_KEY not configured", body = ErrorResponse),
        (status = 502, description = "Steam API request failed", body = ErrorResponse)
    ),
    tag = "steam"
)]
pub async fn achievement_schema_handler(
    State(state): State<AppState>,
    query: Result<Query<AchievementSchemaQuery>, QueryRejection>,
) -> Result<UpstreamBody, ApiError> {
    let Query(query) = query?;

    let caller_key = query.key.as_deref().filter(|key| !key.is_empty());
    let key = caller_key
        .or(state.config.steam_api_key.as_deref())
        .ok_or(ApiError::Configuration(MISSING_API_KEY))?;

    tracing::info!(
        "Fetching achievement schema (appid: {}, key source: {})",
        query.appid,
        if caller_key.is_some() { "caller" } else { "server" }
    );

    Ok(state.steam_client.schema_for_game(key, query.appid).await?)
}

/// GET /api/fetch-schema handler - Achievement schema with a caller-supplied key
///
/// The server key is never used here. The key is forwarded as given, so a
/// blank or bogus key surfaces as Steam's rejection (502).
#[utoipa::path(
    get,
    path = routes::FETCH_SCHEMA,
    params(
        ("appid" = u32, Query, description = "Steam application id"),
        ("api_key" = String, Query, description = "Steam Web API key to use for this request")
    ),
    responses(
        (status = 200, description = "Steam GetSchemaForGame response, relayed verbatim"),
        (status = 400, description = "Missing appid or api_key", body = ErrorResponse),
        (status = 502, description = "Steam API request failed", body = ErrorResponse)
    ),
    tag = "steam"
)]
pub async fn fetch_schema_handler(
    State(state): State<AppState>,
    query: Result<Query<FetchSchemaQuery>, QueryRejection>,
) -> Result<UpstreamBody, ApiError> {
    let Query(query) = query?;

    tracing::info!("Fetching achievement schema with caller key (appid: {})", query.appid);

    Ok(state
        .steam_client
        .schema_for_game(&query.api_key, query.appid)
        .await?)
}
