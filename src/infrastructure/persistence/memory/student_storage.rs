//! In-Memory Student Storage Implementation

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::{StorageError, StudentStoragePort};
use crate::domain::Student;

/// 内存学生存储
///
/// id 从 1 开始单调递增，与 SQLite AUTOINCREMENT 行为一致。
pub struct InMemoryStudentStorage {
    students: DashMap<i64, Student>,
    next_id: AtomicI64,
}

impl InMemoryStudentStorage {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for InMemoryStudentStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStoragePort for InMemoryStudentStorage {
    async fn create_student(
        &self,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.students.insert(
            id,
            Student {
                id,
                name: name.to_string(),
                email: email.to_string(),
                age,
            },
        );
        tracing::debug!(student_id = id, "Student inserted (memory)");
        Ok(id)
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        self.students
            .get(&id)
            .map(|s| s.clone())
            .ok_or(StorageError::NotFound(id))
    }

    async fn update_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        // 与 SQL UPDATE 一致：目标不存在时不插入，也不报错
        if let Some(mut student) = self.students.get_mut(&id) {
            student.name = name.to_string();
            student.email = email.to_string();
            student.age = age;
        } else {
            tracing::debug!(student_id = id, "Update matched no student (memory)");
        }
        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<i64, StorageError> {
        if self.students.remove(&id).is_none() {
            tracing::debug!(student_id = id, "Delete matched no student (memory)");
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_student_lifecycle() {
        let storage = InMemoryStudentStorage::new();

        // Create
        let id = storage.create_student("A", "a@x.com", 20).await.unwrap();
        assert_eq!(id, 1);

        // Get
        let student = storage.get_student_by_id(id).await.unwrap();
        assert_eq!(student.name, "A");

        // Update
        assert_eq!(storage.update_by_id(id, "B", "b@x.com", 21).await.unwrap(), id);
        let student = storage.get_student_by_id(id).await.unwrap();
        assert_eq!(
            student,
            Student {
                id,
                name: "B".to_string(),
                email: "b@x.com".to_string(),
                age: 21,
            }
        );

        // Delete
        assert_eq!(storage.delete_by_id(id).await.unwrap(), id);
        assert!(matches!(
            storage.get_student_by_id(id).await,
            Err(StorageError::NotFound(1))
        ));
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let storage = InMemoryStudentStorage::new();
        assert_eq!(storage.update_by_id(42, "B", "b@x.com", 21).await.unwrap(), 42);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let storage = Arc::new(InMemoryStudentStorage::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    storage
                        .create_student(&format!("s{}", i), "s@x.com", 20)
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for task in tasks {
            let id = task.await.unwrap();
            assert!(id > 0);
            assert!(ids.insert(id));
        }
        assert_eq!(storage.len(), 64);
    }
}
