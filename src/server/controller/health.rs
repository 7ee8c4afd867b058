use axum::{
    extract::State,
    http::{
        header::{CACHE_CONTROL, EXPIRES, PRAGMA, USER_AGENT},
        HeaderMap, HeaderName, Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::health::{HealthDto, UnhealthyDto},
    server::{model::health::unhealthy_dto, service::health::HealthService, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Headers preventing any cache from serving a stale health answer.
const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
];

/// Report process health.
///
/// Logs the request URL, method and user agent, then returns the health report.
/// Responses are never cacheable.
///
/// # Returns
/// - `200 OK` - Process is healthy
/// - `503 Service Unavailable` - Health report could not be built
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Process is healthy", body = HealthDto),
        (status = 503, description = "Process is unhealthy", body = UnhealthyDto)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");
    tracing::info!("Health check: {} {} (user-agent: {})", method, uri, user_agent);

    let service = HealthService::new(&state.config, state.started_at, state.clock);
    match service.report() {
        Ok(report) => (StatusCode::OK, NO_CACHE_HEADERS, Json(report.into_dto())).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                NO_CACHE_HEADERS,
                Json(unhealthy_dto(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use axum::http::StatusCode;

    use crate::server::{
        controller::test_support::{app, get, state},
        data::FixtureSource,
    };

    fn broken_clock() -> SystemTime {
        UNIX_EPOCH - Duration::from_secs(60)
    }

    /// Tests a healthy response.
    ///
    /// Verifies status, payload fields and cache headers.
    ///
    /// Expected: 200 with `status: "healthy"` and no-cache headers
    #[tokio::test]
    async fn reports_healthy() {
        let (status, headers, body) = get(
            app(state(FixtureSource::sample())),
            "/health",
            &[("user-agent", "probe/1.0")],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert_eq!(body["environment"], "development");
        assert_eq!(body["renderMode"], "server");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["platform"]["pid"].is_u64());
        assert!(body["platform"]["os"].is_string());

        assert_eq!(
            headers["cache-control"],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }

    /// Tests the unhealthy path with a clock before the Unix epoch.
    ///
    /// Expected: 503 with `status: "unhealthy"`, an error message and no-cache headers
    #[tokio::test]
    async fn reports_unhealthy_on_clock_failure() {
        let state = state(FixtureSource::sample()).with_clock(broken_clock);

        let (status, headers, body) = get(app(state), "/health", &[]).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body["timestamp"].is_string());
        assert_eq!(
            headers["cache-control"],
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }
}
