//! Fallback Handlers
//!
//! 未匹配的路径和方法也按统一错误格式返回

use axum::extract::OriginalUri;

use crate::infrastructure::http::error::ApiError;

/// 路径不存在
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// 路径存在但方法不匹配
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
