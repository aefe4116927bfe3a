//! # skillview-foundation
//!
//! Foundation layer for SkillView:
//! - Model: 네트워크 소속, 스킬 카탈로그, 권한 레코드
//! - Storage: JsonStore (데이터셋 파일)
//! - Config: 데이터셋 경로 결정 및 로드
//! - Error: 로딩 단계 에러
//!
//! ## 데이터 흐름
//!
//! ```text
//! system.json ──▶ DatasetConfig::load ──▶ System (불변)
//!                                            │
//!                                            ▼
//!                                  skillview-core (평가)
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Model (데이터 모델)
// ============================================================================
pub use model::{
    Identity, Masks, Network, NetworkSet, PermissionRecord, SharingScope, System, WILDCARD,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{DatasetConfig, DATASET_ENV_VAR, DEFAULT_DATASET_FILE};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;
