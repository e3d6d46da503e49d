//! SQLite Student Storage

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{StorageError, StudentStoragePort};
use crate::domain::Student;

/// SQLite Student Storage
pub struct SqliteStudentStorage {
    pool: DbPool,
}

impl SqliteStudentStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

#[async_trait]
impl StudentStoragePort for SqliteStudentStorage {
    async fn create_student(
        &self,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student, StorageError> {
        let row: Option<StudentRow> =
            sqlx::query_as("SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Student::from).ok_or(StorageError::NotFound(id))
    }

    async fn update_by_id(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            student_id = id,
            rows_affected = result.rows_affected(),
            "Student update executed"
        );

        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<i64, StorageError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            student_id = id,
            rows_affected = result.rows_affected(),
            "Student delete executed"
        );

        Ok(id)
    }
}
