//! 불변 금칙어 사전 스냅샷
//!
//! 활성 항목만 담고, 삽입 순서를 그대로 검사 순서로 사용합니다.
//! 각 항목의 정규화 문자열과 초성 문자열은 생성 시 한 번만 계산합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::term::{BannedTerm, Category};
use crate::core::normalizer::{extract_chosung, normalize};

/// 사전 로드/파싱 에러
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("사전 파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("사전 JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 사전 파일 형식: 배열 또는 `{ "terms": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum DictionaryFile {
    List(Vec<BannedTerm>),
    Wrapped { terms: Vec<BannedTerm> },
}

impl DictionaryFile {
    fn into_terms(self) -> Vec<BannedTerm> {
        match self {
            DictionaryFile::List(terms) | DictionaryFile::Wrapped { terms } => terms,
        }
    }
}

/// 검사 준비가 끝난 항목
#[derive(Debug, Clone)]
pub(crate) struct PreparedTerm {
    pub(crate) term: BannedTerm,
    pub(crate) normalized: String,
    /// 정규화 문자열의 문자 목록 (퍼지 비교용)
    pub(crate) normalized_chars: Vec<char>,
    pub(crate) chosung: String,
}

impl PreparedTerm {
    fn new(term: BannedTerm) -> Self {
        let normalized = normalize(&term.term);
        let chosung = extract_chosung(&normalized);
        Self {
            normalized_chars: normalized.chars().collect(),
            normalized,
            chosung,
            term,
        }
    }
}

/// 활성 금칙어의 불변 스냅샷
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    entries: Vec<PreparedTerm>,
}

impl WordDictionary {
    /// 빈 사전
    pub fn empty() -> Self {
        Self::default()
    }

    /// 항목 목록으로 스냅샷 생성
    ///
    /// 비활성 항목과 빈 문자열 항목은 제외합니다.
    pub fn new<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = BannedTerm>,
    {
        let entries = terms
            .into_iter()
            .filter(|t| t.active && !t.term.is_empty())
            .map(PreparedTerm::new)
            .collect();
        Self { entries }
    }

    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// [
    ///   { "term": "시발", "category": "GENERAL", "severity": "HIGH" },
    ///   { "term": "ㅅㅂ", "category": "GENERAL", "severity": "HIGH", "active": false }
    /// ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let parsed: DictionaryFile = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::new(parsed.into_terms()))
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self, DictionaryError> {
        let parsed: DictionaryFile = serde_json::from_str(json_str)?;
        Ok(Self::new(parsed.into_terms()))
    }

    /// 활성 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 활성 항목 (검사 순서)
    pub fn iter(&self) -> impl Iterator<Item = &BannedTerm> {
        self.entries.iter().map(|e| &e.term)
    }

    /// 원문이 일치하는 첫 항목
    pub fn get(&self, term: &str) -> Option<&BannedTerm> {
        self.iter().find(|t| t.term == term)
    }

    /// 분류별 항목 수
    pub fn count_by_category(&self) -> HashMap<Category, usize> {
        let mut counts = HashMap::new();
        for term in self.iter() {
            *counts.entry(term.category).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn prepared(&self) -> &[PreparedTerm] {
        &self.entries
    }
}

impl FromIterator<BannedTerm> for WordDictionary {
    fn from_iter<I: IntoIterator<Item = BannedTerm>>(iter: I) -> Self {
        Self::new(iter)
    }
}
