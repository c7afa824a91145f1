use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const CATALOG: &str = r#"[
  {"tags": "rust,cli", "text": "A fast CLI tool"},
  {"tags": "web,ts", "text": "A web dashboard"}
]"#;

fn card_filter() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("card-filter"));
    cmd.env_remove("CARD_FILTER_QUERY");
    cmd
}

fn write_catalog(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn run_json(catalog: &Path, query: Option<&str>) -> Value {
    let mut cmd = card_filter();
    cmd.arg("filter").arg("--catalog").arg(catalog).arg("--json");
    if let Some(query) = query {
        cmd.args(["--query", query]);
    }
    let output = cmd.output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn filter_by_tag_hides_other_cards() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", CATALOG);

    let body = run_json(&catalog, Some("cli"));
    assert_eq!(body["visible"], serde_json::json!([true, false]));
    assert_eq!(body["shown"], 1);
    assert_eq!(body["hidden"], 1);
}

#[test]
fn filter_is_case_insensitive_on_text() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", CATALOG);

    let body = run_json(&catalog, Some("DASHBOARD"));
    assert_eq!(body["visible"], serde_json::json!([false, true]));
    assert_eq!(body["query"], "dashboard");
}

#[test]
fn missing_query_shows_everything() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", CATALOG);

    assert_eq!(run_json(&catalog, None)["visible"], serde_json::json!([true, true]));
    assert_eq!(run_json(&catalog, Some(""))["shown"], 2);
}

#[test]
fn query_can_come_from_environment() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", CATALOG);

    card_filter()
        .env("CARD_FILTER_QUERY", "web")
        .arg("filter")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout("hidden\t0\tA fast CLI tool\nshown\t1\tA web dashboard\n");
}

#[test]
fn toml_catalog_and_only_visible() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(
        temp.path(),
        "cards.toml",
        r#"
[[cards]]
tags = "embedded,c++"
text = "Autonomous vehicle"

[[cards]]
tags = "c,memory"
text = "Garbage collector"
"#,
    );

    card_filter()
        .arg("filter")
        .arg("--catalog")
        .arg(&catalog)
        .args(["--query", "Memory", "--only-visible"])
        .assert()
        .success()
        .stdout("shown\t1\tGarbage collector\n");
}

#[test]
fn missing_catalog_fails_with_message() {
    let temp = tempdir().unwrap();

    card_filter()
        .arg("filter")
        .arg("--catalog")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to load catalog"));
}

#[test]
fn check_reports_card_count() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", CATALOG);

    card_filter()
        .arg("check")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicates::str::contains(": 2 cards"));
}

#[test]
fn check_rejects_unparseable_catalog() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(temp.path(), "cards.json", "{ not json = [");

    card_filter()
        .arg("check")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicates::str::contains("not valid JSON or TOML"));
}

#[test]
fn check_names_misspelled_card_field() {
    let temp = tempdir().unwrap();
    let catalog = write_catalog(
        temp.path(),
        "cards.json",
        r#"[{"tags": "rust", "txt": "typo"}]"#,
    );

    card_filter()
        .arg("check")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown field `txt`"));
}
