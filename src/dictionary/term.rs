//! 금칙어 항목과 분류

use serde::{Deserialize, Serialize};

/// 금칙어 분류 (엔진은 결과에 복사만 함)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    General,
    Sexual,
    Discrimination,
    Violence,
    Politics,
}

/// 심각도 (LOW < MEDIUM < HIGH)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// 금칙어 사전 항목
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BannedTerm {
    /// 금칙어 원문
    pub term: String,
    pub category: Category,
    pub severity: Severity,
    /// 비활성 항목은 스냅샷 생성 시 제외
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl BannedTerm {
    /// 활성 상태의 새 항목
    pub fn new(term: impl Into<String>, category: Category, severity: Severity) -> Self {
        Self {
            term: term.into(),
            category,
            severity,
            active: true,
        }
    }

    /// 비활성 상태로 표시
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
