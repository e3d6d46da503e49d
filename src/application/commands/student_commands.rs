//! Student Commands

use crate::domain::StudentDraft;

/// 创建学生命令
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub draft: StudentDraft,
}

/// 全量更新学生命令
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub student_id: i64,
    pub draft: StudentDraft,
}

/// 删除学生命令
#[derive(Debug, Clone)]
pub struct DeleteStudent {
    pub student_id: i64,
}
