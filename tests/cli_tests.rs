//! CLI integration tests using the REAL skillrepos binary

mod common;

use common::TestHome;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let home = TestHome::new();
    home.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("open"));
}

#[test]
fn test_version_output() {
    let home = TestHome::new();
    home.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skillrepos"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_list_empty() {
    let home = TestHome::new();
    home.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories registered."));
}

#[test]
fn test_add_github_then_list() {
    let home = TestHome::new();
    home.cmd()
        .args(["add", "github", "https://github.com/anthropics/skills.git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"))
        .stdout(predicate::str::contains("anthropics/skills"));

    home.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("anthropics/skills"))
        .stdout(predicate::str::contains("Branch: main"));

    let stored = home.read_file("repositories.yaml");
    assert!(stored.contains("owner: anthropics"));
    assert!(stored.contains("kind: github"));
}

#[test]
fn test_add_zip_then_list_detailed() {
    let home = TestHome::new();
    home.cmd()
        .args([
            "add",
            "zip",
            "--name",
            "team-pack",
            "--url",
            "https://example.com/skills.zip",
        ])
        .assert()
        .success();

    home.cmd()
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team-pack"))
        .stdout(predicate::str::contains("https://example.com/skills.zip"))
        .stdout(predicate::str::contains("Kind: zip"));
}

#[test]
fn test_add_invalid_reference_fails() {
    let home = TestHome::new();
    home.cmd()
        .args(["add", "github", "a/b/c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Invalid repository reference: a/b/c",
        ));

    assert!(!home.path.join("repositories.yaml").exists());
}

#[test]
fn test_add_zip_requires_name_first() {
    let home = TestHome::new();
    home.cmd()
        .args(["add", "zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package name is required"));

    home.cmd()
        .args(["add", "zip", "--name", "p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package URL is required"));

    home.cmd()
        .args(["add", "zip", "--name", "p", "--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package URL"));
}

#[test]
fn test_add_duplicate_fails() {
    let home = TestHome::new();
    home.cmd().args(["add", "github", "a/b"]).assert().success();
    home.cmd()
        .args(["add", "github", "github.com/a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already registered"));
}

#[test]
fn test_list_counts_skills_from_file() {
    let home = TestHome::new();
    home.cmd()
        .args(["add", "github", "a/b", "--branch", "dev"])
        .assert()
        .success();
    let skills = home.write_file(
        "skills.json",
        r#"[
            {"name": "one", "repoOwner": "a", "repoName": "b", "repoBranch": "dev"},
            {"name": "two", "repoOwner": "a", "repoName": "b", "repoBranch": "dev"},
            {"name": "three", "repoOwner": "a", "repoName": "b"}
        ]"#,
    );

    home.cmd()
        .args(["list", "--skills"])
        .arg(&skills)
        .assert()
        .success()
        .stdout(predicate::str::contains("a/b (2 skills)"))
        .stdout(predicate::str::contains("Branch: dev"));
}

#[test]
fn test_list_json() {
    let home = TestHome::new();
    home.cmd().args(["add", "github", "a/b"]).assert().success();
    home.cmd()
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"displayName\": \"a/b\""))
        .stdout(predicate::str::contains("\"webUrl\": \"https://github.com/a/b\""));
}

#[test]
fn test_remove_with_yes() {
    let home = TestHome::new();
    home.cmd().args(["add", "github", "a/b"]).assert().success();
    home.cmd()
        .args(["remove", "a", "b", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed a/b"));

    home.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories registered."));
}

#[test]
fn test_remove_unknown_fails() {
    let home = TestHome::new();
    home.cmd()
        .args(["remove", "a", "b", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_open_unknown_fails() {
    let home = TestHome::new();
    home.cmd()
        .args(["open", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository 'a/b' not found"));
}

#[test]
fn test_home_flag_overrides_env() {
    let home = TestHome::new();
    let other = TestHome::new();
    home.cmd()
        .args(["add", "github", "a/b", "--home"])
        .arg(&other.path)
        .assert()
        .success();

    assert!(other.path.join("repositories.yaml").exists());
    assert!(!home.path.join("repositories.yaml").exists());
}

#[test]
fn test_completions_bash() {
    let home = TestHome::new();
    home.cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillrepos"));
}
