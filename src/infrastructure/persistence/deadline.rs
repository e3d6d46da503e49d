//! Deadline Storage - 为任意存储后端的每次调用加上超时
//!
//! 超时后内部 future 被丢弃（sqlx 查询随之取消），返回 `StorageError::Timeout`。
//! 不做任何重试。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{StorageError, StudentStoragePort};
use crate::domain::Student;

/// 带超时的存储装饰器
pub struct DeadlineStudentStorage {
    inner: Arc<dyn StudentStoragePort>,
    timeout: Duration,
}

impl DeadlineStudentStorage {
    pub fn new(inner: Arc<dyn StudentStoragePort>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, StorageError>
    where
        T: Send,
        F: Future<Output = Result<T, StorageError>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation = operation,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Storage call exceeded deadline"
                );
                Err(StorageError::Timeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl StudentStoragePort for DeadlineStudentStorage {
    async fn create_student(
        &self,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        self.bounded("create_student", self.inner.create_student(name, email, age))
            .await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        self.bounded("get_student_by_id", self.inner.get_student_by_id(id))
            .await
    }

    async fn update_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        self.bounded("update_by_id", self.inner.update_by_id(id, name, email, age))
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<i64, StorageError> {
        self.bounded("delete_by_id", self.inner.delete_by_id(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::memory::InMemoryStudentStorage;

    /// 永远挂起的存储
    struct StalledStorage;

    #[async_trait]
    impl StudentStoragePort for StalledStorage {
        async fn create_student(&self, _: &str, _: &str, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }

        async fn get_student_by_id(&self, _: i64) -> Result<Student, StorageError> {
            std::future::pending().await
        }

        async fn update_by_id(&self, _: i64, _: &str, _: &str, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }

        async fn delete_by_id(&self, _: i64) -> Result<i64, StorageError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_passes_through_within_deadline() {
        let storage = DeadlineStudentStorage::new(
            Arc::new(InMemoryStudentStorage::new()),
            Duration::from_secs(5),
        );

        let id = storage.create_student("A", "a@x.com", 20).await.unwrap();
        assert_eq!(storage.get_student_by_id(id).await.unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_stalled_backend_times_out() {
        let storage = DeadlineStudentStorage::new(Arc::new(StalledStorage), Duration::from_millis(50));

        let err = storage.delete_by_id(1).await.unwrap_err();
        assert!(matches!(err, StorageError::Timeout(_)));
        assert_eq!(err.to_string(), "storage operation timed out after 50ms");
    }
}
