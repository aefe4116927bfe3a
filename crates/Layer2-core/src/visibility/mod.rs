//! Visibility - 스킬 가시성 결정
//!
//! - `index`: viewee 레코드 중 적용 대상 선택 (PermissionIndex)
//! - `evaluator`: 네트워크별 플래그 병합 (VisibilityEvaluator)
//! - `aggregator`: 보이는 스킬 수집/출력 형식 (SkillAggregator)
//! - `report`: 전체 쌍 리포트 (VisibilityReport)
//!
//! 모든 연산은 입력만 읽는 순수 함수다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use skillview_core::visibility::SkillAggregator;
//!
//! let system = DatasetConfig::resolve(None).load()?;
//! let aggregator = SkillAggregator::new(&system);
//! println!("{}", aggregator.check_all("Alice", "Bob"));
//! ```

mod aggregator;
mod evaluator;
mod index;
mod report;

pub use aggregator::{render, SkillAggregator, NONE_SENTINEL, SEPARATOR};
pub use evaluator::VisibilityEvaluator;
pub use index::{PermissionIndex, Selection};
pub use report::{ReportLine, ViewerBlock, VisibilityReport};
