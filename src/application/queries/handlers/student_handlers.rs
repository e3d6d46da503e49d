//! Student Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StudentStoragePort;
use crate::application::queries::GetStudent;
use crate::domain::Student;

/// GetStudent Handler
pub struct GetStudentHandler {
    storage: Arc<dyn StudentStoragePort>,
}

impl GetStudentHandler {
    pub fn new(storage: Arc<dyn StudentStoragePort>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, query: GetStudent) -> Result<Student, ApplicationError> {
        let student = self.storage.get_student_by_id(query.student_id).await?;
        Ok(student)
    }
}
