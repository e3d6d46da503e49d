//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧

mod student_queries;

pub mod handlers;

pub use student_queries::*;
