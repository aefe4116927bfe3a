//! 로드된 데이터셋
//!
//! 시작 시 한 번 로드되고 이후에는 읽기 전용으로만 사용된다.

use super::de::null_entries_as_default;
use super::{Identity, NetworkSet, PermissionRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

static NO_NETWORKS: NetworkSet = NetworkSet::new();

/// 네트워크 소속, 스킬 카탈로그, 권한 레코드 전체
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct System {
    /// identity -> 소속 네트워크
    #[serde(deserialize_with = "null_entries_as_default")]
    pub networks: BTreeMap<Identity, NetworkSet>,

    /// identity -> 권한 레코드 (저장 순서 유지)
    #[serde(deserialize_with = "null_entries_as_default")]
    pub perms: BTreeMap<Identity, Vec<PermissionRecord>>,

    /// identity -> 스킬 이름 (카탈로그 순서 유지)
    #[serde(deserialize_with = "null_entries_as_default")]
    pub skills: BTreeMap<Identity, Vec<String>>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn with_networks<I, S>(mut self, person: impl Into<Identity>, networks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.networks
            .entry(person.into())
            .or_default()
            .extend(networks.into_iter().map(Into::into));
        self
    }

    pub fn with_skills<I, S>(mut self, person: impl Into<Identity>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills
            .entry(person.into())
            .or_default()
            .extend(skills.into_iter().map(Into::into));
        self
    }

    pub fn with_record(mut self, person: impl Into<Identity>, record: PermissionRecord) -> Self {
        self.perms.entry(person.into()).or_default().push(record);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// 네트워크 맵에 등록된 사람들 (사전순)
    pub fn people(&self) -> Vec<&str> {
        self.networks.keys().map(String::as_str).collect()
    }

    /// 소속 네트워크, 모르는 사람이면 빈 집합
    pub fn networks_of(&self, person: &str) -> &NetworkSet {
        self.networks.get(person).unwrap_or(&NO_NETWORKS)
    }

    /// 스킬 카탈로그, 모르는 사람이면 빈 슬라이스
    pub fn skills_of(&self, person: &str) -> &[String] {
        self.skills.get(person).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 권한 레코드, 모르는 사람이면 빈 슬라이스
    pub fn records_of(&self, person: &str) -> &[PermissionRecord] {
        self.perms.get(person).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, person: &str) -> bool {
        self.networks.contains_key(person)
            || self.skills.contains_key(person)
            || self.perms.contains_key(person)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// 구조적 문제를 찾아 경고로 보고한다. 데이터셋을 거부하지는 않는다.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        let mut names = self
            .networks
            .keys()
            .chain(self.skills.keys())
            .chain(self.perms.keys());
        if names.any(|name| name.trim().is_empty()) {
            findings.push("dataset contains an empty identity name".to_string());
        }

        for person in self.skills.keys() {
            if !self.networks.contains_key(person) {
                findings.push(format!("{} has skills but no network entry", person));
            }
        }

        for (person, records) in &self.perms {
            let mut seen = HashSet::new();
            let loose_wildcard = records.iter().any(|r| !r.is_class && r.is_wildcard());
            for record in records {
                if record.is_class && !record.is_wildcard() {
                    findings.push(format!(
                        "{}: class record for '{}' is not a wildcard",
                        person, record.object_id
                    ));
                }
                if !record.owner_id.is_empty() && record.owner_id != *person {
                    findings.push(format!(
                        "{}: record for '{}' is owned by {}",
                        person, record.object_id, record.owner_id
                    ));
                }
                if !seen.insert((record.is_class, record.object_id.as_str())) {
                    findings.push(format!(
                        "{}: duplicate record for '{}', the last one wins",
                        person, record.object_id
                    ));
                }
                // Class 플래그 없는 `*` 레코드는 모든 specific 레코드와 같은 슬롯을 다툰다
                if loose_wildcard && !record.is_class && !record.is_wildcard() {
                    findings.push(format!(
                        "{}: record for '{}' shares its slot with a non-class wildcard, the later one wins",
                        person, record.object_id
                    ));
                }
            }
        }

        for finding in &findings {
            warn!("{}", finding);
        }
        findings
    }
}
