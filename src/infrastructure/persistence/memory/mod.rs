//! In-Memory Persistence
//!
//! 进程内学生存储，重启即丢失，适合本地开发和测试

mod student_storage;

pub use student_storage::InMemoryStudentStorage;
