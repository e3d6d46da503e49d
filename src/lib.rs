//! Students API - 学生资源 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Student Context: 学生实体与字段校验
//!
//! 应用层 (application/):
//! - Ports: StudentStoragePort（存储契约）
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 按 id 查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API、统一响应格式、访问日志、优雅关闭
//! - Persistence: SQLite、内存、超时装饰器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
