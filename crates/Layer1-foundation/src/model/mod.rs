//! Data model for SkillView
//!
//! - `permission`: 권한 레코드 (PermissionRecord, SharingScope)
//! - `system`: 로드된 전체 데이터셋 (네트워크 소속, 스킬 카탈로그, 권한)

mod de;
mod permission;
mod system;

use std::collections::BTreeSet;

pub use permission::{Masks, PermissionRecord, SharingScope, WILDCARD};
pub use system::System;

/// 사람을 가리키는 불투명 식별자
pub type Identity = String;

/// 네트워크 이름
pub type Network = String;

/// 네트워크 집합 (중복 제거, 사전순)
pub type NetworkSet = BTreeSet<Network>;
