//! End-to-end CLI tests over temporary manifest files.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::{assert_eq, assert_ne};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const UNSORTED: &str = r#"<?xml version="1.0"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <dependencies>
    <dependency>
      <groupId>org.zebra</groupId>
      <artifactId>stripes</artifactId>
    </dependency>
    <dependency>
      <groupId>org.ant</groupId>
      <artifactId>hill</artifactId>
    </dependency>
  </dependencies>
</project>
"#;

const SORTED: &str = r#"<?xml version="1.0"?>
<project>
  <dependencies>
    <dependency>
      <groupId>org.ant</groupId>
      <artifactId>hill</artifactId>
    </dependency>
    <dependency>
      <groupId>org.zebra</groupId>
      <artifactId>stripes</artifactId>
    </dependency>
  </dependencies>
</project>
"#;

fn write_pom(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("pom.xml");
    fs::write(&path, contents).unwrap();
    path
}

fn pomsort() -> Command {
    Command::cargo_bin("pomsort").unwrap()
}

#[test]
fn check_passes_on_sorted_manifest() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, SORTED);

    pomsort()
        .args(["check", pom.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("dependencies are sorted"));
}

#[test]
fn check_fails_with_exit_code_2_on_unsorted_manifest() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["check", pom.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("unsorted"))
        .stdout(predicate::str::contains("org.ant:hill"));
}

#[test]
fn check_emits_json_when_asked() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    let output = pomsort()
        .args(["check", pom.to_str().unwrap(), "--format", "json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["schema"], "pomsort.report.v1");
    assert_eq!(report["verdict"]["status"], "fail");
    assert_eq!(report["findings"][0]["index"], 1);
}

#[test]
fn check_refuses_unrecognized_file_names_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("build.xml");
    fs::write(&path, SORTED).unwrap();

    pomsort()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .code(1);

    pomsort()
        .args(["check", path.to_str().unwrap(), "--force"])
        .assert()
        .success();
}

#[test]
fn fix_defaults_to_dry_run_and_prints_a_diff() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["fix", pom.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry-run"))
        .stdout(predicate::str::contains("org.ant"));

    assert_eq!(fs::read_to_string(&pom).unwrap(), UNSORTED);
}

#[test]
fn fix_write_sorts_the_manifest_and_check_then_passes() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["fix", pom.to_str().unwrap(), "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("applied"));

    let after = fs::read_to_string(&pom).unwrap();
    let ant = after.find("org.ant").unwrap();
    let zebra = after.find("org.zebra").unwrap();
    assert!(ant < zebra);

    pomsort()
        .args(["check", pom.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn fix_write_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["fix", pom.to_str().unwrap(), "--write"])
        .assert()
        .success();
    let once = fs::read_to_string(&pom).unwrap();

    pomsort()
        .args(["fix", pom.to_str().unwrap(), "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already sorted"));
    assert_eq!(fs::read_to_string(&pom).unwrap(), once);
}

#[test]
fn fix_write_backup_keeps_the_original() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["fix", pom.to_str().unwrap(), "--write", "--backup"])
        .assert()
        .success();

    let backup = dir.path().join("pom.xml.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), UNSORTED);
    assert_ne!(fs::read_to_string(&pom).unwrap(), UNSORTED);
}

#[test]
fn fix_preserves_text_outside_the_dependency_container() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, UNSORTED);

    pomsort()
        .args(["fix", pom.to_str().unwrap(), "--write"])
        .assert()
        .success();

    let after = fs::read_to_string(&pom).unwrap();
    assert!(after.starts_with("<?xml version=\"1.0\"?>\n<project>\n  <modelVersion>4.0.0</modelVersion>"));
    assert!(after.ends_with("</project>\n"));
}

#[test]
fn config_file_sets_the_default_output_format() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, SORTED);
    fs::write(
        dir.path().join("pomsort.toml"),
        "[check]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = pomsort()
        .args(["check", pom.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["verdict"]["status"], "pass");
}

#[test]
fn unparseable_manifest_is_skipped_not_failed() {
    let dir = TempDir::new().unwrap();
    let pom = write_pom(&dir, "<project><dependencies>");

    pomsort()
        .args(["check", pom.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn missing_file_is_a_runtime_error() {
    let dir = TempDir::new().unwrap();
    let missing: &Path = &dir.path().join("pom.xml");

    pomsort()
        .args(["check", missing.to_str().unwrap()])
        .assert()
        .code(1);
}
