//! HTTP Middleware
//!
//! 访问日志：记录方法、路径、状态码和耗时，日志级别随状态码类别变化

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::Level;

/// 根据状态码选择日志级别
fn level_for(status: http::StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// 访问日志中间件
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let level = level_for(status);
    if level == Level::ERROR {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if level == Level::WARN {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, routing::get, Router};
    use http::{Request as HttpRequest, StatusCode};
    use tower::util::ServiceExt;

    async fn bad_request_handler() -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    #[test]
    fn test_level_for_status_class() {
        assert_eq!(level_for(StatusCode::OK), Level::INFO);
        assert_eq!(level_for(StatusCode::CREATED), Level::INFO);
        assert_eq!(level_for(StatusCode::BAD_REQUEST), Level::WARN);
        assert_eq!(level_for(StatusCode::INTERNAL_SERVER_ERROR), Level::ERROR);
    }

    #[tokio::test]
    async fn test_middleware_passes_response_through() {
        let app = Router::new()
            .route("/bad", get(bad_request_handler))
            .layer(axum::middleware::from_fn(access_log_middleware));

        let request = HttpRequest::builder()
            .uri("/bad")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
