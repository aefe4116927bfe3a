//! skillview-core: Visibility engine for SkillView
//!
//! Layer2 - 가시성 결정 레이어
//!
//! # 주요 모듈
//!
//! - `visibility`: 권한 레코드 선택, 네트워크별 병합, 스킬 집계, 전체 리포트
//!
//! # 사용 예시
//!
//! ```ignore
//! use skillview_core::{SkillAggregator, VisibilityReport};
//!
//! let aggregator = SkillAggregator::new(&system);
//! assert_eq!(aggregator.check_all("Alice", "Bob"), "Boating | Birdwatching");
//!
//! print!("{}", VisibilityReport::build(&system));
//! ```

pub mod visibility;

// Re-exports: Visibility
pub use visibility::{
    render, PermissionIndex, ReportLine, Selection, SkillAggregator, ViewerBlock,
    VisibilityEvaluator, VisibilityReport, NONE_SENTINEL, SEPARATOR,
};
