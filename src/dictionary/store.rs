//! 사전 스냅샷 교체 저장소
//!
//! 갱신은 새 스냅샷을 만들어 포인터만 원자적으로 바꿉니다.
//! 읽는 쪽은 잠금 없이 현재 스냅샷의 `Arc`를 얻습니다.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use super::snapshot::{DictionaryError, WordDictionary};
use super::term::BannedTerm;

/// 교체 가능한 사전 저장소
pub struct DictionaryStore {
    current: ArcSwap<WordDictionary>,
    version: AtomicU64,
}

impl DictionaryStore {
    /// 빈 사전으로 시작
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(WordDictionary::empty()),
            version: AtomicU64::new(0),
        }
    }

    /// 초기 스냅샷 지정
    pub fn with_dictionary(dictionary: WordDictionary) -> Self {
        Self {
            current: ArcSwap::from_pointee(dictionary),
            version: AtomicU64::new(1),
        }
    }

    /// 현재 스냅샷
    ///
    /// 반환된 스냅샷은 이후 갱신과 무관하게 그대로 유지됩니다.
    pub fn snapshot(&self) -> Arc<WordDictionary> {
        self.current.load_full()
    }

    /// 스냅샷 교체 횟수
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// 스냅샷 교체
    pub fn replace(&self, dictionary: WordDictionary) {
        let count = dictionary.len();
        self.current.store(Arc::new(dictionary));
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        log::info!("금칙어 사전 갱신: {}개 활성 항목 (version {})", count, version);
    }

    /// 항목 목록으로 새 스냅샷을 만들어 교체
    pub fn refresh<I>(&self, terms: I)
    where
        I: IntoIterator<Item = BannedTerm>,
    {
        self.replace(WordDictionary::new(terms));
    }

    /// 파일에서 사전을 읽어 교체
    ///
    /// 로드 실패 시 기존 스냅샷을 유지합니다.
    pub fn refresh_from_path(&self, path: impl AsRef<Path>) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        match WordDictionary::load(path) {
            Ok(dictionary) => {
                let count = dictionary.len();
                self.replace(dictionary);
                Ok(count)
            }
            Err(e) => {
                log::error!("금칙어 사전 로드 실패 ({}): {}", path.display(), e);
                Err(e)
            }
        }
    }
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}
