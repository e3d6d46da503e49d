//! Student Context - Entity

use serde::{Deserialize, Serialize};

use super::validation::ValidationErrors;

/// 学生记录
///
/// `id` 由存储后端分配，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// 调用方提交的学生数据（未校验）
///
/// 所有字段均可缺失，缺失与否由校验规则决定。
/// 请求体中的 `id` 以及未知字段会被忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// 通过校验的学生数据，唯一可以交给存储端口的形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: String,
    email: String,
    age: i64,
}

impl NewStudent {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

impl StudentDraft {
    /// 执行全部字段校验，任一字段违规即返回聚合后的错误
    pub fn validate(self) -> Result<NewStudent, ValidationErrors> {
        let violations = ValidationErrors::check(&self);

        // required 规则保证：无违规时三个字段均为 Some
        match (self.name, self.email, self.age) {
            (Some(name), Some(email), Some(age)) if violations.is_empty() => {
                Ok(NewStudent { name, email, age })
            }
            _ => Err(violations),
        }
    }
}
