use std::env;
use anyhow::{Context, Result};

pub const DEFAULT_STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub steam_api_key: Option<String>,
    pub steam_id: Option<String>,
    pub steam_api_base_url: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Values are trimmed; empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let steam_api_key = var("STEAM_API_KEY");
        let steam_id = var("STEAM_ID");

        let steam_api_base_url = var("STEAM_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_STEAM_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            steam_api_key,
            steam_id,
            steam_api_base_url,
            service_port,
            service_host,
        })
    }

    /// Server key and user id, only when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.steam_api_key.as_deref()?, self.steam_id.as_deref()?))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Steam API key: {}",
            self.steam_api_key.as_deref().map(mask).unwrap_or_else(|| "not set".to_string()));
        tracing::info!("  Steam ID: {}", self.steam_id.as_deref().unwrap_or("not set"));
        tracing::info!("  Steam API base URL: {}", self.steam_api_base_url);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);

        if self.credentials().is_none() {
            tracing::warn!(
                "STEAM_API_KEY or STEAM_ID is not set; /api/games and /api/achievements will answer 500"
            );
        }
    }
}

fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}****", visible)
}
