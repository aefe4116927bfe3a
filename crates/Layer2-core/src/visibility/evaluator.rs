//! VisibilityEvaluator - 네트워크별 플래그를 누적해 가시성 결정
//!
//! ## 병합 순서
//!
//! ```text
//! [class] ─▶ [specific]          (없는 슬롯은 건너뜀)
//!    │
//!    ├─ hidden      → 모든 플래그 false (해당 시점의 리셋)
//!    ├─ shared_to   → viewer가 속한 네트워크만 true
//!    │  (all_networks면 viewee의 네트워크 전체)
//!    ├─ public      → 모든 플래그 true
//!    └─ hidden_from → 해당 네트워크 false
//! ```
//!
//! 모든 레이어를 처리한 뒤 플래그를 OR 한 값이 결과다.

use super::index::Selection;
use skillview_foundation::{NetworkSet, PermissionRecord};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

/// 네트워크 이름 -> 가시성 플래그 (호출마다 새로 생성)
type Flags<'n> = HashMap<&'n str, bool>;

/// 가시성 평가기 (상태 없음)
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityEvaluator;

impl VisibilityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// viewer가 선택된 레코드 기준으로 속성을 볼 수 있는지
    pub fn is_visible(
        &self,
        viewer_networks: &NetworkSet,
        viewee_networks: &NetworkSet,
        selection: Selection<'_>,
    ) -> bool {
        let mut flags: Flags<'_> = viewer_networks
            .iter()
            .map(|network| (network.as_str(), false))
            .collect();

        for record in Self::layers(selection) {
            Self::apply(&mut flags, &record, viewee_networks);
        }

        flags.values().any(|&visible| visible)
    }

    /// 평가 순서대로 정렬된 레코드 목록 (class 먼저)
    ///
    /// 아무 레코드도 없으면 "내 모든 네트워크" 기본 레코드 하나로 대체한다.
    pub fn layers(selection: Selection<'_>) -> Vec<Cow<'_, PermissionRecord>> {
        if selection.is_empty() {
            debug!("No permission record found, using the all-networks default");
            return vec![Cow::Owned(PermissionRecord::default_permissive())];
        }

        selection
            .class
            .into_iter()
            .chain(selection.specific)
            .map(Cow::Borrowed)
            .collect()
    }

    fn apply(flags: &mut Flags<'_>, record: &PermissionRecord, viewee_networks: &NetworkSet) {
        let scope = record.scope();

        if record.hidden {
            flags.values_mut().for_each(|visible| *visible = false);
        }

        let shared_to = if scope.all_networks {
            viewee_networks
        } else {
            &scope.shared_to
        };
        for network in shared_to {
            if let Some(visible) = flags.get_mut(network.as_str()) {
                *visible = true;
            }
        }

        if record.public {
            flags.values_mut().for_each(|visible| *visible = true);
        }

        for network in &scope.hidden_from {
            if let Some(visible) = flags.get_mut(network.as_str()) {
                *visible = false;
            }
        }
    }
}
