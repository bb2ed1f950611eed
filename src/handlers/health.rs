use crate::error::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Does not contact Steam; the proxy is healthy as long as it answers.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = Router::new().route(crate::routes::HEALTH, get(health_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
    }
}
