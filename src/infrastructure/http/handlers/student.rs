//! Student HTTP Handlers
//!
//! 每个 handler 的流程：解析 id / 请求体 → 调用应用层 → 写出一次 JSON 响应。
//! 提取器失败也在这里转换为统一错误格式，不使用 axum 默认的纯文本拒绝响应。

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    response::Response,
};
use http::StatusCode;
use std::sync::Arc;

use crate::application::{CreateStudent, DeleteStudent, GetStudent, UpdateStudent};
use crate::domain::StudentDraft;
use crate::infrastructure::http::dto::{write_json, DeleteResponse, IdResponse};
use crate::infrastructure::http::error::{ApiError, StudentOperation};
use crate::infrastructure::http::state::AppState;

// ============================================================================
// 请求解析
// ============================================================================

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path.map_err(|e| ApiError::InvalidId(e.body_text()))?;
    raw.parse::<i64>()
        .map_err(|e| ApiError::InvalidId(e.to_string()))
}

/// 空请求体（零字节或仅空白）与格式错误分开报告，
/// JSON `null` 视为所有字段缺失，交给字段校验报告
fn decode_draft(body: Result<Bytes, BytesRejection>) -> Result<StudentDraft, ApiError> {
    let bytes = body.map_err(|e| ApiError::Decode(e.body_text()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }

    serde_json::from_slice::<Option<StudentDraft>>(&bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建学生
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    tracing::info!("Creating student");

    let draft = decode_draft(body)?;

    let id = state
        .create_student_handler
        .handle(CreateStudent { draft })
        .await
        .map_err(|e| ApiError::from_application(StudentOperation::Create, e))?;

    Ok(write_json(StatusCode::CREATED, &IdResponse { id }))
}

/// 获取学生详情
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let student_id = parse_id(path)?;
    tracing::info!(student_id = student_id, "Getting student");

    let student = state
        .get_student_handler
        .handle(GetStudent { student_id })
        .await
        .map_err(|e| ApiError::from_application(StudentOperation::Get, e))?;

    Ok(write_json(StatusCode::OK, &student))
}

/// 全量更新学生
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let student_id = parse_id(path)?;
    tracing::info!(student_id = student_id, "Updating student");

    let draft = decode_draft(body)?;

    let id = state
        .update_student_handler
        .handle(UpdateStudent { student_id, draft })
        .await
        .map_err(|e| ApiError::from_application(StudentOperation::Update, e))?;

    Ok(write_json(StatusCode::OK, &IdResponse { id }))
}

/// 删除学生
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let student_id = parse_id(path)?;
    tracing::info!(student_id = student_id, "Deleting student");

    let id = state
        .delete_student_handler
        .handle(DeleteStudent { student_id })
        .await
        .map_err(|e| ApiError::from_application(StudentOperation::Delete, e))?;

    Ok(write_json(StatusCode::OK, &DeleteResponse { status: id }))
}
