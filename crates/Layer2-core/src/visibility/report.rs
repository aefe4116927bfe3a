//! VisibilityReport - 모든 (viewer, viewee) 쌍에 대한 결과
//!
//! viewer, viewee 모두 사전순이며 자기 자신과의 쌍은 제외한다.
//! 출력은 `viewer : viewee : result` 줄들이고 viewer 블록마다 빈 줄이 뒤따른다.

use super::aggregator::{render, SkillAggregator};
use rayon::prelude::*;
use serde::Serialize;
use skillview_foundation::System;
use std::fmt;

/// 한 쌍의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub viewer: String,
    pub viewee: String,
    pub visible: Vec<String>,
}

impl ReportLine {
    /// `<none>` 또는 `" | "`로 연결된 스킬 목록
    pub fn result(&self) -> String {
        render(&self.visible)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} : {}", self.viewer, self.viewee, self.result())
    }
}

/// viewer 한 명의 결과 묶음
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerBlock {
    pub viewer: String,
    pub lines: Vec<ReportLine>,
}

/// 전체 리포트
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityReport {
    pub blocks: Vec<ViewerBlock>,
}

impl VisibilityReport {
    /// 순차 계산
    pub fn build(system: &System) -> Self {
        let aggregator = SkillAggregator::new(system);
        let people = system.people();
        let blocks = people
            .iter()
            .map(|viewer| Self::block(&aggregator, viewer, &people))
            .collect();
        Self { blocks }
    }

    /// viewer 단위 병렬 계산 - 결과 순서는 `build`와 동일
    pub fn build_parallel(system: &System) -> Self {
        let aggregator = SkillAggregator::new(system);
        let people = system.people();
        let blocks = people
            .par_iter()
            .map(|viewer| Self::block(&aggregator, viewer, &people))
            .collect();
        Self { blocks }
    }

    fn block(aggregator: &SkillAggregator<'_>, viewer: &str, people: &[&str]) -> ViewerBlock {
        let lines = people
            .iter()
            .filter(|viewee| **viewee != viewer)
            .map(|viewee| ReportLine {
                viewer: viewer.to_string(),
                viewee: viewee.to_string(),
                visible: aggregator
                    .visible_skills(viewer, viewee)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect();
        ViewerBlock {
            viewer: viewer.to_string(),
            lines,
        }
    }

    /// viewer 한 명의 블록만 계산
    ///
    /// 네트워크 맵에 없는 사람도 viewer가 될 수 있다 (소속 네트워크가 없으므로 모두 `<none>`).
    pub fn for_viewer(system: &System, viewer: &str) -> Self {
        let aggregator = SkillAggregator::new(system);
        let people = system.people();
        Self {
            blocks: vec![Self::block(&aggregator, viewer, &people)],
        }
    }

    /// 모든 줄 (블록 순서대로)
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.blocks.iter().flat_map(|block| block.lines.iter())
    }
}

impl fmt::Display for VisibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            for line in &block.lines {
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
