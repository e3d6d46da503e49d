//! Application State
//!
//! 启动时构建一次，通过 `Arc<AppState>` 在所有请求间共享。
//! 唯一的共享资源是存储端口，handler 本身无状态。

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateStudentHandler, DeleteStudentHandler, UpdateStudentHandler,
    // Query handlers
    GetStudentHandler,
    // Ports
    StudentStoragePort,
};

/// 应用状态
pub struct AppState {
    /// 环境标签（dev / staging / production ...）
    pub env: String,

    // ========== Command Handlers ==========
    pub create_student_handler: CreateStudentHandler,
    pub update_student_handler: UpdateStudentHandler,
    pub delete_student_handler: DeleteStudentHandler,

    // ========== Query Handlers ==========
    pub get_student_handler: GetStudentHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(env: impl Into<String>, storage: Arc<dyn StudentStoragePort>) -> Self {
        Self {
            env: env.into(),
            create_student_handler: CreateStudentHandler::new(storage.clone()),
            update_student_handler: UpdateStudentHandler::new(storage.clone()),
            delete_student_handler: DeleteStudentHandler::new(storage.clone()),
            get_student_handler: GetStudentHandler::new(storage),
        }
    }
}
