//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET     健康检查
//! - /api/students          POST    创建学生
//! - /api/students/:id      GET     获取学生
//! - /api/students/:id      PUT     全量更新学生
//! - /api/students/:id      DELETE  删除学生
//!
//! 未知路径返回 404、不支持的方法返回 405，均为 JSON 错误体。

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::route_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::method_not_allowed),
        )
        .merge(student_routes())
}

/// Student 路由
fn student_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/students",
            post(handlers::create_student).fallback(handlers::method_not_allowed),
        )
        .route(
            "/students/:id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student)
                .fallback(handlers::method_not_allowed),
        )
}
