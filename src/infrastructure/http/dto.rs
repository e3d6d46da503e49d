//! Data Transfer Objects + 统一响应写出
//!
//! 成功响应直接序列化结果值；错误响应统一为 `{"status": "error", "error": "<message>"}`。
//! 所有响应都经过 [`write_json`]，保证每个请求只写一次、且总是 JSON。

use axum::{body::Body, response::Response};
use http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use serde::Serialize;
use std::fmt::Display;

use crate::domain::ValidationErrors;

const STATUS_ERROR: &str = "error";

/// 序列化失败时的兜底响应体
const ENCODE_FAILURE_BODY: &str = r#"{"status":"error","error":"failed to encode response"}"#;

// ============================================================================
// 统一响应写出
// ============================================================================

/// 以给定状态码写出 JSON 响应
pub fn write_json<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_vec(data) {
        Ok(bytes) => json_response(status, Body::from(bytes)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode response body");
            json_response(StatusCode::INTERNAL_SERVER_ERROR, Body::from(ENCODE_FAILURE_BODY))
        }
    }
}

fn json_response(status: StatusCode, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

// ============================================================================
// 错误响应
// ============================================================================

/// 统一错误响应格式
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

impl ErrorResponse {
    /// 原样包装底层错误消息
    pub fn general(err: impl Display) -> Self {
        Self {
            status: STATUS_ERROR,
            error: err.to_string(),
        }
    }

    /// 聚合字段违规：每个字段一条消息，以 ", " 连接
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            status: STATUS_ERROR,
            error: errors.to_string(),
        }
    }
}

// ============================================================================
// Student DTOs
// ============================================================================

/// create / update 的成功响应
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

/// delete 的成功响应，id 放在 `status` 键下
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StudentDraft;

    #[test]
    fn test_general_error_keeps_message_verbatim() {
        let response = ErrorResponse::general("empty body");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"status": "error", "error": "empty body"})
        );
    }

    #[test]
    fn test_validation_error_joins_messages() {
        let errors = ValidationErrors::check(&StudentDraft {
            name: None,
            email: None,
            age: Some(18),
        });
        let response = ErrorResponse::validation(&errors);
        assert_eq!(response.error, "name is required, email is required");
        assert_eq!(response.error, errors.to_string());
        assert_eq!(response.status, "error");
    }

    #[tokio::test]
    async fn test_write_json_sets_status_and_content_type() {
        let response = write_json(StatusCode::CREATED, &IdResponse { id: 3 });
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"id":3}"#);
    }

    #[tokio::test]
    async fn test_delete_response_shape() {
        let response = write_json(StatusCode::OK, &DeleteResponse { status: 5 });
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"status":5}"#);
    }
}
