//! Student Storage Port - 出站端口
//!
//! 学生数据持久化的抽象接口。SQLite、内存或远程实现均可替换，
//! 不影响上层 handler。实现必须可被多个并发请求同时使用。

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Student;

/// 存储错误
///
/// 对 HTTP 层来说所有变体都是同一类失败（500）。
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no student found with id {0}")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(String),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

/// Student Storage Port
///
/// 单行、非事务操作。`update_by_id` 与 `delete_by_id` 返回目标 id，
/// 不区分是否真的有行受影响。
#[async_trait]
pub trait StudentStoragePort: Send + Sync {
    /// 新建学生，返回后端分配的 id
    async fn create_student(&self, name: &str, email: &str, age: i64)
        -> Result<i64, StorageError>;

    /// 根据 id 获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError>;

    /// 覆盖三个字段，返回目标 id
    async fn update_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError>;

    /// 删除学生，返回目标 id
    async fn delete_by_id(&self, id: i64) -> Result<i64, StorageError>;
}
