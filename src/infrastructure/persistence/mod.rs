//! Persistence Layer - 数据持久化
//!
//! StudentStoragePort 的实现：SQLite、内存，以及超时装饰器

pub mod deadline;
pub mod memory;
pub mod sqlite;

pub use deadline::DeadlineStudentStorage;
pub use memory::InMemoryStudentStorage;
pub use sqlite::SqliteStudentStorage;
