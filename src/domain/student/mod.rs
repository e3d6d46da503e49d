//! Student Context - 学生资源
//!
//! 职责:
//! - Student 实体（线上格式与持久化格式一致）
//! - 来自调用方的草稿（StudentDraft）及其字段校验

mod entity;
mod validation;

pub use entity::{NewStudent, Student, StudentDraft};
pub use validation::{FieldViolation, ValidationErrors, ViolationKind};
