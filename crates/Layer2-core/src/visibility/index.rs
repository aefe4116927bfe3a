//! PermissionIndex - viewee의 레코드 중 속성에 적용되는 것 선택
//!
//! 레코드 목록을 한 번 훑으면서 class / specific 슬롯을 채운다.
//! 같은 슬롯에 여러 레코드가 걸리면 마지막 것이 남는다 (last-match-wins).

use skillview_foundation::{PermissionRecord, System};
use tracing::debug;

/// 선택 결과 - class 레코드와 specific 레코드 각각 최대 하나
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    pub class: Option<&'a PermissionRecord>,
    pub specific: Option<&'a PermissionRecord>,
}

impl<'a> Selection<'a> {
    /// 레코드 슬라이스에서 직접 선택
    pub fn from_records(records: &'a [PermissionRecord], attribute: &str) -> Self {
        let mut selection = Self::default();

        for record in records.iter().filter(|r| r.applies_to(attribute)) {
            let slot = if record.is_class {
                &mut selection.class
            } else {
                &mut selection.specific
            };
            if let Some(previous) = slot.replace(record) {
                debug!(
                    attribute,
                    object_id = %previous.object_id,
                    class = record.is_class,
                    "Later permission record overrides an earlier match"
                );
            }
        }

        selection
    }

    /// 적용되는 레코드가 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.class.is_none() && self.specific.is_none()
    }
}

/// System 전체에 대한 선택기
#[derive(Debug, Clone, Copy)]
pub struct PermissionIndex<'a> {
    system: &'a System,
}

impl<'a> PermissionIndex<'a> {
    pub fn new(system: &'a System) -> Self {
        Self { system }
    }

    pub fn select(&self, viewee: &str, attribute: &str) -> Selection<'a> {
        Selection::from_records(self.system.records_of(viewee), attribute)
    }
}
