//! 역직렬화 헬퍼
//!
//! 기존 데이터 파일에는 빈 목록 대신 `null`이 들어 있는 경우가 있다.
//! `null`은 해당 타입의 기본값(빈 목록, false, 빈 문자열)으로 읽는다.

use super::Identity;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// `null` -> `T::default()`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// identity 맵 자체 또는 각 값이 `null`이면 기본값
pub(crate) fn null_entries_as_default<'de, D, V>(
    deserializer: D,
) -> Result<BTreeMap<Identity, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de> + Default,
{
    let entries = Option::<BTreeMap<Identity, Option<V>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(person, value)| (person, value.unwrap_or_default()))
        .collect())
}
