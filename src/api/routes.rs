use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::api::docs::DOCS_HTML;
use crate::config::{API_VERSION, SERVICE_NAME, SYSTEM_NAME};

/// Endpoints advertised by the /api root response.
pub const API_ENDPOINTS: &[&str] = &["/api/health", "/api/hello", "/api/stats", "/api/docs"];

/// Full route table, listed in the 404 envelope.
pub const AVAILABLE_ENDPOINTS: &[&str] =
    &["/api/", "/api/health", "/api/hello", "/api/stats", "/api/docs"];

#[derive(Clone)]
pub struct ApiState {
    /// Deployment environment name, surfaced by /api/health.
    pub environment: String,
}

/// Static route table. axum has no trailing-slash redirect, so `/api` and
/// `/api/` are registered separately; everything unmatched falls through to
/// the 404 envelope.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        .route("/api/health", get(health))
        .route("/api/hello", get(hello))
        .route("/api/stats", get(stats))
        .route("/api/docs", get(api_docs))
        .fallback(unmatched_route)
        .with_state(state)
}

/// Fresh ISO-8601 UTC timestamp, generated once per response. The only
/// dynamic value in any payload.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub timestamp: String,
    pub system: String,
    pub status: String,
    pub uptime: String,
}

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
    pub available_endpoints: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn api_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {SYSTEM_NAME} API"),
        version: API_VERSION.to_string(),
        timestamp: now_iso(),
        endpoints: API_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: now_iso(),
        environment: state.environment,
    })
}

async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: format!("Hello from {SYSTEM_NAME} API!"),
        timestamp: now_iso(),
    })
}

async fn stats() -> Json<StatsResponse> {
    Json(StatsResponse {
        timestamp: now_iso(),
        system: SYSTEM_NAME.to_string(),
        status: "operational".to_string(),
        uptime: "100%".to_string(),
    })
}

async fn api_docs() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// The single modeled error: a request for a path outside the route table.
async fn unmatched_route(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    let path = uri.path().to_string();
    debug!(%path, "unmatched route");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not Found".to_string(),
            message: format!("Endpoint {path} not found"),
            timestamp: now_iso(),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{DateTime, Utc};
    use tower::ServiceExt;

    fn app() -> Router {
        router(ApiState {
            environment: "test".to_string(),
        })
    }

    async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn assert_fresh_timestamp(body: &serde_json::Value) {
        let ts = body["timestamp"].as_str().expect("timestamp present");
        let parsed = DateTime::parse_from_rfc3339(ts).expect("valid ISO-8601");
        let age = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 5, "timestamp not fresh: {ts}");
    }

    #[tokio::test]
    async fn root_lists_endpoints_with_and_without_trailing_slash() {
        for path in ["/api", "/api/"] {
            let (status, body) = get_json(path).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["version"], "1.0.0");
            assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
            let endpoints = body["endpoints"].as_array().unwrap();
            assert_eq!(endpoints.len(), API_ENDPOINTS.len());
            assert_fresh_timestamp(&body);
        }
    }

    #[tokio::test]
    async fn health_reports_service_and_environment() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "micro-saas-scout-api");
        assert_eq!(body["environment"], "test");
        assert_fresh_timestamp(&body);
    }

    #[tokio::test]
    async fn hello_greets() {
        let (status, body) = get_json("/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from Micro SaaS Scout API!");
        assert_fresh_timestamp(&body);
    }

    #[tokio::test]
    async fn stats_snapshot_is_static_apart_from_timestamp() {
        let (status, body) = get_json("/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["system"], "Micro SaaS Scout");
        assert_eq!(body["status"], "operational");
        assert_eq!(body["uptime"], "100%");
        assert_fresh_timestamp(&body);
    }

    #[tokio::test]
    async fn docs_returns_html() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/docs")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/health"));
    }

    #[tokio::test]
    async fn unknown_path_gets_404_envelope_naming_the_path() {
        let (status, body) = get_json("/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Endpoint /api/unknown not found");
        let available = body["available_endpoints"].as_array().unwrap();
        assert_eq!(available.len(), AVAILABLE_ENDPOINTS.len());
        assert_fresh_timestamp(&body);
    }
}
