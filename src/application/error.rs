//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::StorageError;
use crate::domain::ValidationErrors;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 字段校验失败，消息为聚合后的字段违规
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// 存储端口失败（含未找到、约束冲突、连接错误、超时）
    #[error("{0}")]
    Storage(#[from] StorageError),
}
