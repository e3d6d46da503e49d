//! Student Context - 字段校验
//!
//! 规则按字段顺序（name → email → age）逐条执行，不在第一个违规处短路。
//! 缺失（或零值）报告为 `<field> is required`，其余违规报告为 `<field> is invalid`。

use std::fmt;

use super::entity::StudentDraft;

/// 违规类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// 字段缺失或为零值
    Required,
    /// 格式或范围不符合要求
    Invalid,
}

/// 单个字段违规
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Required => write!(f, "{} is required", self.field),
            ViolationKind::Invalid => write!(f, "{} is invalid", self.field),
        }
    }
}

type Rule = fn(&StudentDraft) -> Option<ViolationKind>;

/// 有序规则表: (字段名, 规则)
const RULES: &[(&str, Rule)] = &[
    ("name", check_name),
    ("email", check_email),
    ("age", check_age),
];

fn check_name(draft: &StudentDraft) -> Option<ViolationKind> {
    match draft.name.as_deref() {
        None | Some("") => Some(ViolationKind::Required),
        Some(_) => None,
    }
}

fn check_email(draft: &StudentDraft) -> Option<ViolationKind> {
    match draft.email.as_deref() {
        None | Some("") => Some(ViolationKind::Required),
        Some(email) if !is_plausible_email(email) => Some(ViolationKind::Invalid),
        Some(_) => None,
    }
}

fn check_age(draft: &StudentDraft) -> Option<ViolationKind> {
    match draft.age {
        None | Some(0) => Some(ViolationKind::Required),
        Some(age) if age < 1 => Some(ViolationKind::Invalid),
        Some(_) => None,
    }
}

/// 邮箱格式检查：恰好一个 `@`，本地部分非空，域名至少两段且每段非空，不含空白
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// 一次请求的全部字段违规
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// 对草稿执行全部规则
    pub fn check(draft: &StudentDraft) -> Self {
        let violations = RULES
            .iter()
            .filter_map(|&(field, rule)| rule(draft).map(|kind| FieldViolation { field, kind }))
            .collect();

        Self { violations }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
