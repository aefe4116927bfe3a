//! Dataset Config - 데이터셋 파일 위치 및 로드
//!
//! 경로 우선순위: CLI 인자 > `JSONFILE` 환경 변수 > `system.json`

use crate::model::System;
use crate::storage::JsonStore;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 기본 데이터셋 파일명
pub const DEFAULT_DATASET_FILE: &str = "system.json";

/// 데이터셋 경로를 지정하는 환경 변수
pub const DATASET_ENV_VAR: &str = "JSONFILE";

/// 데이터셋 위치 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_FILE)
    }
}

impl DatasetConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// CLI 인자와 프로세스 환경 변수로 경로 결정
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_path, std::env::var(DATASET_ENV_VAR).ok())
    }

    /// 환경 변수 값을 직접 받아 경로 결정 (빈 문자열은 미설정으로 취급)
    pub fn resolve_with(cli_path: Option<PathBuf>, env_value: Option<String>) -> Self {
        let config = match (cli_path, env_value.filter(|v| !v.is_empty())) {
            (Some(path), _) => Self::new(path),
            (None, Some(value)) => Self::new(value),
            (None, None) => Self::default(),
        };
        debug!(path = %config.path.display(), "Resolved dataset path");
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 데이터셋 로드 - 파일이 없으면 Config, 파싱 실패는 Json 에러
    pub fn load(&self) -> Result<System> {
        let (store, filename) = JsonStore::for_file(&self.path)?;
        if !store.exists(&filename) {
            return Err(Error::Config(format!(
                "Dataset file not found: {}",
                self.path.display()
            )));
        }

        let system: System = store.load(&filename)?;
        info!(
            path = %self.path.display(),
            people = system.networks.len(),
            "Loaded dataset"
        );
        system.validate();
        Ok(system)
    }
}
