//! 금칙어 사전
//!
//! 외부 로더가 만든 활성 항목 목록을 불변 스냅샷으로 보관합니다.
//! 엔진은 읽기만 하며, 갱신은 스냅샷 교체로만 이루어집니다.

mod snapshot;
mod store;
mod term;

pub(crate) use snapshot::PreparedTerm;
pub use snapshot::{DictionaryError, WordDictionary};
pub use store::DictionaryStore;
pub use term::{BannedTerm, Category, Severity};
