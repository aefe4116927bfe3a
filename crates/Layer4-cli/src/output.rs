//! 출력 형식 (text / json)

use clap::ValueEnum;
use serde_json::json;
use skillview_core::{render, VisibilityReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 전체 리포트
pub fn report(report: &VisibilityReport, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
    })
}

/// 한 쌍의 결과 - `viewer : viewee : result`
pub fn pair(
    viewer: &str,
    viewee: &str,
    skills: &[&str],
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("{} : {} : {}\n", viewer, viewee, render(skills)),
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&json!({
                "viewer": viewer,
                "viewee": viewee,
                "visible": skills,
            }))?
        ),
    })
}

/// 스킬 하나의 결과
pub fn skill(
    viewer: &str,
    viewee: &str,
    skill: &str,
    visible: bool,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let state = if visible { "visible" } else { "hidden" };
            format!("{} : {} : {} : {}\n", viewer, viewee, skill, state)
        }
        OutputFormat::Json => format!(
            "{}\n",
            serde_json::to_string_pretty(&json!({
                "viewer": viewer,
                "viewee": viewee,
                "skill": skill,
                "visible": visible,
            }))?
        ),
    })
}
