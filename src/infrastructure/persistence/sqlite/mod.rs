//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod student_storage;

pub use database::*;
pub use student_storage::*;
