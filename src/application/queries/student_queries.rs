//! Student Queries

/// 根据 id 获取学生
#[derive(Debug, Clone)]
pub struct GetStudent {
    pub student_id: i64,
}
