use crate::error::{ApiError, ErrorResponse, MISSING_CREDENTIALS};
use crate::routes;
use crate::state::AppState;
use crate::steam::UpstreamBody;
use axum::extract::State;

/// GET /api/games handler - Owned games of the configured Steam user
///
/// Relays `IPlayerService/GetOwnedGames/v1` (with app info) verbatim, whatever
/// status Steam answers with. Only an unreachable upstream is a 502.
#[utoipa::path(
    get,
    path = routes::GAMES,
    responses(
        (status = 200, description = "Steam GetOwnedGames response, relayed verbatim"),
        (status = 500, description = "STEAM_API_KEY or STEAM_ID not configured", body = ErrorResponse),
        (status = 502, description = "Steam API unreachable", body = ErrorResponse)
    ),
    tag = "steam"
)]
pub async fn games_handler(State(state): State<AppState>) -> Result<UpstreamBody, ApiError> {
    let (key, steam_id) = state
        .config
        .credentials()
        .ok_or(ApiError::Configuration(MISSING_CREDENTIALS))?;

    tracing::info!("Fetching owned games for steam id {}", steam_id);

    Ok(state.steam_client.owned_games(key, steam_id).await?)
}
