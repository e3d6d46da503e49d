//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储端口定义（StudentStoragePort）
//! - commands: CQRS 命令及处理器（create / update / delete）
//! - queries: CQRS 查询及处理器（get）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateStudentHandler, DeleteStudentHandler, UpdateStudentHandler},
    CreateStudent, DeleteStudent, UpdateStudent,
};

pub use error::ApplicationError;

pub use ports::{StorageError, StudentStoragePort};

pub use queries::{handlers::GetStudentHandler, GetStudent};
