//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Student Context: 学生资源及其校验规则

pub mod student;

pub use student::{NewStudent, Student, StudentDraft, ValidationErrors};
