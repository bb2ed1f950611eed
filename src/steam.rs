use anyhow::{Context, Result, anyhow};
use axum::body::{Body, Bytes};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::config::Config;

/// A Steam Web API method, addressed as `<interface>/<method>/<version>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub interface: &'static str,
    pub method: &'static str,
    pub version: &'static str,
}

pub const GET_OWNED_GAMES: Endpoint = Endpoint {
    interface: "IPlayerService",
    method: "GetOwnedGames",
    version: "v1",
};

pub const GET_PLAYER_ACHIEVEMENTS: Endpoint = Endpoint {
    interface: "ISteamUserStats",
    method: "GetPlayerAchievements",
    version: "v1",
};

pub const GET_SCHEMA_FOR_GAME: Endpoint = Endpoint {
    interface: "ISteamUserStats",
    method: "GetSchemaForGame",
    version: "v2",
};

impl Endpoint {
    fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/{}/",
            base_url, self.interface, self.method, self.version
        )
    }
}

/// Raw upstream response body
///
/// The proxy never parses what Steam sends back; the bytes are relayed to the
/// caller as-is with a JSON content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamBody(Bytes);

#[cfg(test)]
impl UpstreamBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl IntoResponse for UpstreamBody {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Body::from(self.0),
        )
            .into_response()
    }
}

/// How a non-2xx upstream status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Non-2xx is an error
    RequireSuccess,
    /// Steam's error payload is relayed like any other body
    Relay,
}

/// Shareable Steam Web API client for use across async handlers
#[derive(Clone)]
pub struct SteamClient {
    inner: Arc<reqwest::Client>,
    base_url: Arc<str>,
}

impl SteamClient {
    /// Create a new client pointed at the configured upstream base URL
    ///
    /// No timeout is set; the reqwest defaults apply.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        tracing::info!("Steam API client ready: {}", config.steam_api_base_url);

        Ok(Self {
            inner: Arc::new(client),
            base_url: Arc::from(config.steam_api_base_url.as_str()),
        })
    }

    /// Issue a single GET against `endpoint` with the given query parameters
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the body cannot be
    /// read, and under [`StatusPolicy::RequireSuccess`] also when the upstream
    /// answers with a non-2xx status.
    pub async fn get(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
        policy: StatusPolicy,
    ) -> Result<UpstreamBody> {
        let url = endpoint.url(&self.base_url);

        let response = self
            .inner
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Request to {}/{} failed", endpoint.interface, endpoint.method))?;

        let status = response.status();
        if !status.is_success() {
            if policy == StatusPolicy::RequireSuccess {
                return Err(anyhow!(
                    "{}/{} answered HTTP {}",
                    endpoint.interface,
                    endpoint.method,
                    status
                ));
            }
            tracing::info!(
                "{}/{} answered HTTP {}, relaying body",
                endpoint.interface,
                endpoint.method,
                status
            );
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {}/{} response body", endpoint.interface, endpoint.method))?;

        tracing::debug!(
            "{}/{} returned {} bytes",
            endpoint.interface,
            endpoint.method,
            body.len()
        );

        Ok(UpstreamBody(body))
    }

    pub async fn owned_games(&self, key: &str, steam_id: &str) -> Result<UpstreamBody> {
        let params = [
            ("key", key.to_string()),
            ("steamid", steam_id.to_string()),
            ("include_appinfo", true.to_string()),
        ];
        self.get(GET_OWNED_GAMES, &params, StatusPolicy::Relay).await
    }

    pub async fn player_achievements(&self, key: &str, steam_id: &str, appid: u32) -> Result<UpstreamBody> {
        let params = [
            ("key", key.to_string()),
            ("steamid", steam_id.to_string()),
            ("appid", appid.to_string()),
        ];
        self.get(GET_PLAYER_ACHIEVEMENTS, &params, StatusPolicy::Relay).await
    }

    pub async fn schema_for_game(&self, key: &str, appid: u32) -> Result<UpstreamBody> {
        let params = [
            ("key", key.to_string()),
            ("appid", appid.to_string()),
        ];
        self.get(GET_SCHEMA_FOR_GAME, &params, StatusPolicy::RequireSuccess).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SteamClient {
        let config = Config {
            steam_api_key: None,
            steam_id: None,
            steam_api_base_url: server.uri(),
            service_port: 8000,
            service_host: "0.0.0.0".to_string(),
        };
        SteamClient::from_config(&config).expect("Failed to build Steam client")
    }

    #[test]
    fn test_endpoint_url_layout() {
        assert_eq!(
            GET_OWNED_GAMES.url("https://api.steampowered.com"),
            "https://api.steampowered.com/IPlayerService/GetOwnedGames/v1/"
        );
        assert_eq!(
            GET_SCHEMA_FOR_GAME.url("http://localhost:1234"),
            "http://localhost:1234/ISteamUserStats/GetSchemaForGame/v2/"
        );
    }

    #[tokio::test]
    async fn test_owned_games_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/IPlayerService/GetOwnedGames/v1/"))
            .and(query_param("key", "ABC"))
            .and(query_param("steamid", "76561198000000000"))
            .and(query_param("include_appinfo", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"response":{}}"#, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .owned_games("ABC", "76561198000000000")
            .await
            .unwrap();

        assert_eq!(body.as_bytes(), br#"{"response":{}}"#);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ISteamUserStats/GetSchemaForGame/v2/"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).schema_for_game("bad-key", 440).await;

        let error = result.unwrap_err();
        assert!(error.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_player_achievements_relays_error_status_body() {
        let server = MockServer::start().await;
        let upstream = r#"{"playerstats":{"error":"Requested app has no stats","success":false}}"#;
        Mock::given(method("GET"))
            .and(path("/ISteamUserStats/GetPlayerAchievements/v1/"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(upstream, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .player_achievements("ABC", "76561198000000000", 70)
            .await
            .unwrap();

        assert_eq!(body.as_bytes(), upstream.as_bytes());
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error() {
        let config = Config {
            steam_api_key: None,
            steam_id: None,
            // discard port, nothing listens there
            steam_api_base_url: "http://127.0.0.1:9".to_string(),
            service_port: 8000,
            service_host: "0.0.0.0".to_string(),
        };
        let client = SteamClient::from_config(&config).unwrap();

        let result = client.player_achievements("ABC", "76561198000000000", 440).await;
        assert!(result.is_err());
    }
}
