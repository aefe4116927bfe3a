//! 권한 레코드 정의
//!
//! 저장 포맷은 기존 데이터 파일과 호환되도록 PascalCase 키를 사용한다:
//!
//! ```json
//! {
//!   "UserID": "Bob", "ObjectType": "skill", "ObjectID": "Boating",
//!   "Class": false, "Public": false, "Hidden": false,
//!   "Masks": { "Networks": { "SharedTo": ["Boundgrave"], "HiddenFrom": [], "All": false } }
//! }
//! ```

use super::de::null_as_default;
use super::{Identity, NetworkSet};
use serde::{Deserialize, Serialize};

/// Class(와일드카드) 레코드의 ObjectID
pub const WILDCARD: &str = "*";

/// 누구에게 공유되는지 기술하는 범위
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharingScope {
    /// 명시적으로 공유된 네트워크
    #[serde(deserialize_with = "null_as_default")]
    pub shared_to: NetworkSet,

    /// 명시적으로 숨긴 네트워크 (레코드 단위로 마지막에 적용)
    #[serde(deserialize_with = "null_as_default")]
    pub hidden_from: NetworkSet,

    /// true면 `shared_to` 대신 viewee 자신의 네트워크 전체를 사용
    #[serde(rename = "All", deserialize_with = "null_as_default")]
    pub all_networks: bool,
}

impl SharingScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// "내 모든 네트워크" 범위
    pub fn all_networks() -> Self {
        Self {
            all_networks: true,
            ..Self::default()
        }
    }
}

/// 마스크 묶음 - 현재는 네트워크 마스크 하나뿐
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Masks {
    #[serde(deserialize_with = "null_as_default")]
    pub networks: SharingScope,
}

/// viewee 한 명의 속성 하나(또는 와일드카드로 전체)에 대한 정책
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PermissionRecord {
    /// 레코드 소유자 (viewee)
    #[serde(rename = "UserID", deserialize_with = "null_as_default")]
    pub owner_id: Identity,

    #[serde(deserialize_with = "null_as_default")]
    pub object_type: String,

    /// 대상 속성 이름, `*`이면 와일드카드
    #[serde(rename = "ObjectID", deserialize_with = "null_as_default")]
    pub object_id: String,

    /// 와일드카드(class) 레코드 여부
    #[serde(rename = "Class", deserialize_with = "null_as_default")]
    pub is_class: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub public: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub masks: Masks,
}

impl PermissionRecord {
    /// 특정 속성에 대한 레코드 생성
    pub fn new(owner_id: impl Into<Identity>, object_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            object_type: "skill".to_string(),
            object_id: object_id.into(),
            ..Self::default()
        }
    }

    /// 와일드카드(class) 레코드 생성
    pub fn class(owner_id: impl Into<Identity>) -> Self {
        Self {
            is_class: true,
            ..Self::new(owner_id, WILDCARD)
        }
    }

    /// 레코드가 하나도 없을 때 대신 쓰는 기본 레코드
    ///
    /// "viewee와 네트워크를 하나라도 공유하면 보인다"
    pub fn default_permissive() -> Self {
        Self {
            masks: Masks {
                networks: SharingScope::all_networks(),
            },
            ..Self::default()
        }
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn shared_to<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masks
            .networks
            .shared_to
            .extend(networks.into_iter().map(Into::into));
        self
    }

    pub fn hidden_from<I, S>(mut self, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masks
            .networks
            .hidden_from
            .extend(networks.into_iter().map(Into::into));
        self
    }

    pub fn all_networks(mut self, all: bool) -> Self {
        self.masks.networks.all_networks = all;
        self
    }

    /// 네트워크 공유 범위
    pub fn scope(&self) -> &SharingScope {
        &self.masks.networks
    }

    pub fn is_wildcard(&self) -> bool {
        self.object_id == WILDCARD
    }

    /// 주어진 속성에 적용되는 레코드인지 (정확히 일치하거나 와일드카드)
    pub fn applies_to(&self, attribute: &str) -> bool {
        self.object_id == attribute || self.is_wildcard()
    }
}
