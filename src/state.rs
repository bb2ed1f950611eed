use crate::config::Config;
use crate::steam::SteamClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub steam_client: SteamClient,
    pub config: Arc<Config>,
}
