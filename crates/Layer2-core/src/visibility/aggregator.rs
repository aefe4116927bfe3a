//! SkillAggregator - viewee의 스킬 중 viewer에게 보이는 것 수집

use super::evaluator::VisibilityEvaluator;
use super::index::PermissionIndex;
use skillview_foundation::System;

/// 보이는 스킬이 없을 때 출력
pub const NONE_SENTINEL: &str = "<none>";

/// 스킬 이름 구분자
pub const SEPARATOR: &str = " | ";

/// 카탈로그 순서를 유지하며 보이는 스킬만 모은다
#[derive(Debug, Clone, Copy)]
pub struct SkillAggregator<'a> {
    system: &'a System,
    index: PermissionIndex<'a>,
    evaluator: VisibilityEvaluator,
}

impl<'a> SkillAggregator<'a> {
    pub fn new(system: &'a System) -> Self {
        Self {
            system,
            index: PermissionIndex::new(system),
            evaluator: VisibilityEvaluator::new(),
        }
    }

    /// 스킬 하나의 가시성
    pub fn visibility(&self, viewer: &str, viewee: &str, skill: &str) -> bool {
        self.evaluator.is_visible(
            self.system.networks_of(viewer),
            self.system.networks_of(viewee),
            self.index.select(viewee, skill),
        )
    }

    /// viewee의 스킬 중 viewer에게 보이는 것 (카탈로그 순서)
    pub fn visible_skills(&self, viewer: &str, viewee: &str) -> Vec<&'a str> {
        self.system
            .skills_of(viewee)
            .iter()
            .filter(|skill| self.visibility(viewer, viewee, skill))
            .map(String::as_str)
            .collect()
    }

    /// `visible_skills` 결과를 출력 형식으로
    pub fn check_all(&self, viewer: &str, viewee: &str) -> String {
        render(&self.visible_skills(viewer, viewee))
    }
}

/// 빈 목록은 `<none>`, 아니면 `" | "`로 연결
pub fn render<S: AsRef<str>>(skills: &[S]) -> String {
    if skills.is_empty() {
        return NONE_SENTINEL.to_string();
    }
    skills
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillview_foundation::PermissionRecord;

    fn system() -> System {
        System::new()
            .with_networks("Alice", ["Stonebroti", "Morfi", "Boundgrave"])
            .with_networks("Bob", ["Boundgrave", "Terregonje"])
            .with_networks("Chip", ["Terregonje", "Vellmoor"])
            .with_networks("Hermit", Vec::<String>::new())
            .with_skills("Alice", ["Alchemy", "Acrobatics"])
            .with_skills("Bob", ["Brainwashing", "Boating", "Birdwatching"])
            .with_skills("Chip", ["Alchemy", "Cooking"])
            .with_record("Alice", PermissionRecord::new("Alice", "Alchemy").public(true))
            .with_record("Bob", PermissionRecord::new("Bob", "Brainwashing").hidden(true))
            .with_record(
                "Bob",
                PermissionRecord::new("Bob", "Boating").shared_to(["Boundgrave"]),
            )
            .with_record(
                "Bob",
                PermissionRecord::new("Bob", "Birdwatching")
                    .shared_to(["Boundgrave"])
                    .public(true),
            )
            .with_record("Chip", PermissionRecord::new("Chip", "Alchemy").hidden(true))
    }

    #[test]
    fn test_visible_skills_keep_catalog_order() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        assert_eq!(
            aggregator.visible_skills("Alice", "Bob"),
            vec!["Boating", "Birdwatching"]
        );
        assert_eq!(aggregator.check_all("Alice", "Bob"), "Boating | Birdwatching");
    }

    #[test]
    fn test_nothing_visible_renders_sentinel() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        assert!(aggregator.visible_skills("Alice", "Chip").is_empty());
        assert_eq!(aggregator.check_all("Alice", "Chip"), NONE_SENTINEL);
    }

    #[test]
    fn test_visibility_is_not_symmetric() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        assert!(aggregator.visibility("Chip", "Alice", "Alchemy"));
        assert!(!aggregator.visibility("Alice", "Chip", "Alchemy"));
    }

    #[test]
    fn test_default_record_for_unlisted_skill() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        // Acrobatics에는 레코드가 없다: Boundgrave를 공유하는 Bob만 볼 수 있다
        assert!(aggregator.visibility("Bob", "Alice", "Acrobatics"));
        assert!(!aggregator.visibility("Chip", "Alice", "Acrobatics"));
        assert_eq!(aggregator.check_all("Bob", "Chip"), "Cooking");
    }

    #[test]
    fn test_viewer_without_networks() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        assert_eq!(aggregator.check_all("Hermit", "Alice"), NONE_SENTINEL);
        assert_eq!(aggregator.check_all("Hermit", "Bob"), NONE_SENTINEL);
    }

    #[test]
    fn test_unknown_people() {
        let system = system();
        let aggregator = SkillAggregator::new(&system);

        assert!(aggregator.visible_skills("Alice", "Nobody").is_empty());
        assert_eq!(aggregator.check_all("Nobody", "Bob"), NONE_SENTINEL);
    }

    #[test]
    fn test_render() {
        assert_eq!(render::<&str>(&[]), "<none>");
        assert_eq!(render(&["Boating"]), "Boating");
        assert_eq!(
            render(&["Alchemy".to_string(), "Cooking".to_string()]),
            "Alchemy | Cooking"
        );
    }
}
