//! JSON 파일 저장소

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// JSON 파일 저장소 (base_dir 기준 상대 파일명)
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 파일 경로에서 (저장소, 파일명) 분리
    ///
    /// 디렉토리 없이 파일명만 주어지면 현재 디렉토리 기준
    pub fn for_file(path: &Path) -> Result<(Self, String)> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::InvalidInput(format!("Not a file path: {}", path.display())))?
            .to_string();
        let store = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::new(parent),
            _ => Self::new(std::env::current_dir()?),
        };
        Ok((store, filename))
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// JSON 로드 - 읽기 실패는 Io, 파싱 실패는 Json 에러
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let content = std::fs::read_to_string(self.file_path(filename))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 파일 존재 여부
    pub fn exists(&self, filename: &str) -> bool {
        self.file_path(filename).exists()
    }
}
