//! Query Handlers 实现

mod student_handlers;

pub use student_handlers::*;
