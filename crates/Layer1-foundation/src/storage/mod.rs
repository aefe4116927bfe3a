//! Storage module for SkillView
//!
//! - `json`: JSON - 데이터셋 파일 저장/로드

mod json;

pub use json::JsonStore;
