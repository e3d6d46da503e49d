//! Ping Handler
//!
//! 健康检查，附带版本号与环境标签

use axum::{extract::State, response::Response};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::write_json;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse<'a> {
    pub status: &'static str,
    pub version: &'static str,
    pub env: &'a str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Response {
    write_json(
        StatusCode::OK,
        &PingResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            env: &state.env,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::persistence::memory::InMemoryStudentStorage;
    use axum::body::Body;
    use http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_ping_reports_version_and_env() {
        let state = AppState::new("staging", Arc::new(InMemoryStudentStorage::new()));
        let app = create_routes().with_state(Arc::new(state));

        let request = Request::builder()
            .uri("/api/ping")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["env"], "staging");
    }
}
