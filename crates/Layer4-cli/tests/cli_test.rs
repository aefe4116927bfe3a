//! skillview 바이너리 동작 검증
//!
//! Layer2-core의 기준 데이터셋(fixtures/system.json)으로 실제 바이너리를 실행한다.

use std::path::Path;
use std::process::{Command, Output};

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../Layer2-core/tests/fixtures/system.json"
);

fn skillview(dataset: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillview"))
        .arg("--file")
        .arg(dataset)
        .args(args)
        .env_remove("JSONFILE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run skillview")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_prints_full_report() {
    let output = skillview(Path::new(FIXTURE), &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 6);
    assert!(text.ends_with("\n\n"));

    assert_eq!(
        blocks[0].lines().collect::<Vec<_>>(),
        vec![
            "Alice : Bob : Boating | Birdwatching",
            "Alice : Chip : <none>",
            "Alice : Diana : Diplomacy",
            "Alice : Frank : <none>",
            "Alice : Gerald : <none>",
        ]
    );
    assert!(blocks[5].starts_with("Gerald : Alice : Alchemy\n"));
    assert!(blocks[5].ends_with("Gerald : Frank : Falconry | Forgery | Forensics"));
}

#[test]
fn test_report_subcommand_matches_default() {
    let default = skillview(Path::new(FIXTURE), &[]);
    let report = skillview(Path::new(FIXTURE), &["report"]);
    let parallel = skillview(Path::new(FIXTURE), &["--parallel", "report"]);

    assert_eq!(stdout(&report), stdout(&default));
    assert_eq!(stdout(&parallel), stdout(&default));
}

#[test]
fn test_report_single_viewer() {
    let output = skillview(Path::new(FIXTURE), &["report", "--viewer", "Frank"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Frank : Alice : Alchemy\n\
         Frank : Bob : Birdwatching\n\
         Frank : Chip : <none>\n\
         Frank : Diana : Diplomacy\n\
         Frank : Gerald : Gambling | Geology | Generosity\n\
         \n"
    );
}

#[test]
fn test_check_pair_and_skill() {
    let output = skillview(Path::new(FIXTURE), &["check", "Alice", "Bob"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Alice : Bob : Boating | Birdwatching\n");

    let output = skillview(Path::new(FIXTURE), &["check", "Frank", "Bob", "--skill", "Boating"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Frank : Bob : Boating : hidden\n");
}

#[test]
fn test_check_unknown_person_fails() {
    let output = skillview(Path::new(FIXTURE), &["check", "Alice", "Nobody"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Unknown person: Nobody"));

    let output = skillview(Path::new(FIXTURE), &["report", "--viewer", "Nobody"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown viewer: Nobody"));
}

#[test]
fn test_json_format() {
    let output = skillview(Path::new(FIXTURE), &["--format", "json", "check", "Chip", "Diana"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["viewer"], "Chip");
    assert_eq!(value["visible"], serde_json::json!(["Dancing", "Diplomacy"]));

    let output = skillview(Path::new(FIXTURE), &["--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let blocks = value["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 6);
    assert_eq!(blocks[1]["viewer"], "Bob");
    assert_eq!(blocks[1]["lines"][0]["visible"], serde_json::json!(["Alchemy", "Acrobatics"]));
}

#[test]
fn test_missing_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = skillview(&dir.path().join("absent.json"), &[]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Cannot load dataset"));
}

#[test]
fn test_invalid_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system.json");
    std::fs::write(&path, "{ \"Networks\": [").unwrap();

    let output = skillview(&path, &["report"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Cannot load dataset"));
}

#[test]
fn test_viewer_without_network_entry_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system.json");
    std::fs::write(
        &path,
        r#"{ "Networks": { "Alice": ["Morfi"] }, "Skills": { "Dora": ["Diving"] } }"#,
    )
    .unwrap();

    let output = skillview(&path, &["report", "--viewer", "Dora"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Dora : Alice : <none>\n\n");
    assert!(stderr(&output).contains("Dora has no network entry"));
}
