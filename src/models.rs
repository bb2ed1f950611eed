use serde::Deserialize;

/// Query parameters for the player achievements endpoint
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AchievementsQuery {
    pub appid: u32,
}

/// Query parameters for the achievement schema endpoint
///
/// `key` overrides the server key when present and non-empty.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AchievementSchemaQuery {
    pub appid: u32,
    pub key: Option<String>,
}

/// Query parameters for the explicit-key schema endpoint
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct FetchSchemaQuery {
    pub appid: u32,
    pub api_key: String,
}
