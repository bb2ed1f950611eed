use crate::error::{ApiError, ErrorResponse, MISSING_CREDENTIALS};
use crate::models::AchievementsQuery;
use crate::routes;
use crate::state::AppState;
use crate::steam::UpstreamBody;
use axum::extract::{rejection::QueryRejection, Query, State};

/// GET /api/achievements handler - Player achievements for one game
///
/// Steam answers 400 with a `playerstats.error` payload for games without
/// stats; that payload is relayed with 200 like any other body.
#[utoipa::path(
    get,
    path = routes::ACHIEVEMENTS,
    params(
        ("appid" = u32, Query, description = "Steam application id")
    ),
    responses(
        (status = 200, description = "Steam GetPlayerAchievements response, relayed verbatim"),
        (status = 400, description = "Missing or non-integer appid", body = ErrorResponse),
        (status = 500, description = "STEAM_API_KEY or STEAM_ID not configured", body = ErrorResponse),
        (status = 502, description = "Steam API unreachable", body = ErrorResponse)
    ),
    tag = "steam"
)]
pub async fn achievements_handler(
    State(state): State<AppState>,
    query: Result<Query<AchievementsQuery>, QueryRejection>,
) -> Result<UpstreamBody, ApiError> {
    // Missing credentials win over a bad query.
    let (key, steam_id) = state
        .config
        .credentials()
        .ok_or(ApiError::Configuration(MISSING_CREDENTIALS))?;
    let Query(query) = query?;

    tracing::info!(
        "Fetching achievements for steam id {} (appid: {})",
        steam_id,
        query.appid
    );

    Ok(state
        .steam_client
        .player_achievements(key, steam_id, query.appid)
        .await?)
}
