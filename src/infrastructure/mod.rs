//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现和 HTTP 入口

pub mod http;
pub mod persistence;

pub use persistence::{DeadlineStudentStorage, InMemoryStudentStorage, SqliteStudentStorage};
