//! Student Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStudent, DeleteStudent, UpdateStudent};
use crate::application::error::ApplicationError;
use crate::application::ports::StudentStoragePort;

// ============================================================================
// CreateStudent
// ============================================================================

/// CreateStudent Handler
pub struct CreateStudentHandler {
    storage: Arc<dyn StudentStoragePort>,
}

impl CreateStudentHandler {
    pub fn new(storage: Arc<dyn StudentStoragePort>) -> Self {
        Self { storage }
    }

    /// 校验草稿并持久化，返回新分配的 id
    pub async fn handle(&self, command: CreateStudent) -> Result<i64, ApplicationError> {
        let student = command.draft.validate()?;

        let student_id = self
            .storage
            .create_student(student.name(), student.email(), student.age())
            .await?;

        tracing::info!(student_id = student_id, "Student created");

        Ok(student_id)
    }
}

// ============================================================================
// UpdateStudent
// ============================================================================

/// UpdateStudent Handler
///
/// 三个字段一起覆盖，不支持部分更新。
pub struct UpdateStudentHandler {
    storage: Arc<dyn StudentStoragePort>,
}

impl UpdateStudentHandler {
    pub fn new(storage: Arc<dyn StudentStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, command: UpdateStudent) -> Result<i64, ApplicationError> {
        let student = command.draft.validate()?;

        let student_id = self
            .storage
            .update_by_id(
                command.student_id,
                student.name(),
                student.email(),
                student.age(),
            )
            .await?;

        tracing::info!(student_id = student_id, "Student updated");

        Ok(student_id)
    }
}

// ============================================================================
// DeleteStudent
// ============================================================================

/// DeleteStudent Handler
pub struct DeleteStudentHandler {
    storage: Arc<dyn StudentStoragePort>,
}

impl DeleteStudentHandler {
    pub fn new(storage: Arc<dyn StudentStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, command: DeleteStudent) -> Result<i64, ApplicationError> {
        let student_id = self.storage.delete_by_id(command.student_id).await?;

        tracing::info!(student_id = student_id, "Student deleted");

        Ok(student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StudentDraft;
    use crate::infrastructure::persistence::memory::InMemoryStudentStorage;

    fn draft(name: &str, email: &str, age: i64) -> StudentDraft {
        StudentDraft {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            age: Some(age),
        }
    }

    #[tokio::test]
    async fn test_create_then_update_overwrites_all_fields() {
        let storage = Arc::new(InMemoryStudentStorage::new());
        let create = CreateStudentHandler::new(storage.clone());
        let update = UpdateStudentHandler::new(storage.clone());

        let id = create
            .handle(CreateStudent {
                draft: draft("A", "a@x.com", 20),
            })
            .await
            .unwrap();
        assert!(id > 0);

        let updated = update
            .handle(UpdateStudent {
                student_id: id,
                draft: draft("B", "b@x.com", 21),
            })
            .await
            .unwrap();
        assert_eq!(updated, id);

        let student = storage.get_student_by_id(id).await.unwrap();
        assert_eq!(student.name, "B");
        assert_eq!(student.email, "b@x.com");
        assert_eq!(student.age, 21);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_storage() {
        let storage = Arc::new(InMemoryStudentStorage::new());
        let create = CreateStudentHandler::new(storage.clone());

        let err = create
            .handle(CreateStudent {
                draft: StudentDraft {
                    name: None,
                    email: None,
                    age: Some(20),
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Validation(_)));
        assert_eq!(err.to_string(), "name is required, email is required");
        assert_eq!(storage.len(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_targeted_id() {
        let storage = Arc::new(InMemoryStudentStorage::new());
        let create = CreateStudentHandler::new(storage.clone());
        let delete = DeleteStudentHandler::new(storage.clone());

        let id = create
            .handle(CreateStudent {
                draft: draft("A", "a@x.com", 20),
            })
            .await
            .unwrap();

        assert_eq!(delete.handle(DeleteStudent { student_id: id }).await.unwrap(), id);
        assert_eq!(delete.handle(DeleteStudent { student_id: id }).await.unwrap(), id);
    }
}
