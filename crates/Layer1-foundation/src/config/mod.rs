//! Config - 설정 관리
//!
//! - `dataset.rs` - 데이터셋 경로 결정 및 로드

mod dataset;

pub use dataset::{DatasetConfig, DATASET_ENV_VAR, DEFAULT_DATASET_FILE};
