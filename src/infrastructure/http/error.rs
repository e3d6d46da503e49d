//! HTTP Error Handling
//!
//! 所有错误都在 handler 内部转换为一次 JSON 写出，不会向上传播。

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use std::fmt;

use super::dto::{write_json, ErrorResponse};
use crate::application::ApplicationError;
use crate::domain::ValidationErrors;

/// 失败的存储操作，用于错误消息前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOperation {
    Create,
    Get,
    Update,
    Delete,
}

impl fmt::Display for StudentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            StudentOperation::Create => "create",
            StudentOperation::Get => "get",
            StudentOperation::Update => "update",
            StudentOperation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体为空
    EmptyBody,
    /// 请求体不是合法的 Student JSON
    Decode(String),
    /// 字段校验失败
    Validation(ValidationErrors),
    /// 路径中的 id 不是整数
    InvalidId(String),
    /// 路径不存在
    RouteNotFound(String),
    /// 路径存在但不支持该方法
    MethodNotAllowed,
    /// 存储端口失败（含未找到）
    Storage {
        operation: StudentOperation,
        message: String,
    },
}

impl ApiError {
    /// 将应用层错误附加操作上下文
    pub fn from_application(operation: StudentOperation, err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(errors) => ApiError::Validation(errors),
            ApplicationError::Storage(e) => ApiError::Storage {
                operation,
                message: e.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// 转换为响应体
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::EmptyBody => ErrorResponse::general("empty body"),
            ApiError::Decode(msg) => ErrorResponse::general(format_args!("invalid body: {}", msg)),
            ApiError::Validation(errors) => ErrorResponse::validation(errors),
            ApiError::InvalidId(msg) => ErrorResponse::general(format_args!("invalid id: {}", msg)),
            ApiError::RouteNotFound(path) => {
                ErrorResponse::general(format_args!("no route for {}", path))
            }
            ApiError::MethodNotAllowed => ErrorResponse::general("method not allowed"),
            ApiError::Storage { operation, message } => ErrorResponse::general(format_args!(
                "failed to {} student: {}",
                operation, message
            )),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.to_error_response();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %body.error, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %body.error, "Bad request");
        }

        write_json(status, &body)
    }
}
