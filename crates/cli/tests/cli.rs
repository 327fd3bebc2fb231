// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box tests for the cw binary

use assert_cmd::Command;
use predicates::prelude::*;

fn cw() -> Command {
    Command::cargo_bin("cw").expect("binary builds")
}

#[test]
fn directives_lists_the_vocabulary() {
    cw().arg("directives")
        .assert()
        .success()
        .stdout(predicate::str::contains("SOURCE_ONLY"))
        .stdout(predicate::str::contains("INCLUDE_FOOTER_FALSE"))
        .stdout(predicate::str::contains("exercise for students"));
}

#[test]
fn publish_requires_a_config() {
    cw().arg("publish")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn publish_end_to_end_on_a_local_tree() {
    let root = tempfile::tempdir().expect("tempdir");

    let source = "# Notebook source\n\
# INCLUDE_HEADER_FALSE\n\
# COMMAND ----------\n\
# INCLUDE_FOOTER_FALSE\n\
# COMMAND ----------\n\
# MAGIC %md\n\
# MAGIC Version {{version_number}}";
    let source_dir = root.path().join("Source");
    std::fs::create_dir_all(&source_dir).expect("mkdirs");
    std::fs::write(source_dir.join("Version Info.py"), source).expect("write notebook");

    let config = r#"{
        "name": "Data Basics",
        "version": "1.0.0",
        "source_dir": "Source",
        "target_dir": "Target"
    }"#;
    let config_path = root.path().join("build.json");
    std::fs::write(&config_path, config).expect("write config");

    cw().arg("--root")
        .arg(root.path())
        .arg("publish")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("published: Version Info"))
        .stdout(predicate::str::contains("All done!"));

    let published = std::fs::read_to_string(root.path().join("Target/Version Info.py"))
        .expect("published notebook");
    assert!(published.contains("Version 1.0.0"));
    assert!(!published.contains("{{version_number}}"));
}

#[test]
fn publish_fails_on_structural_errors() {
    let root = tempfile::tempdir().expect("tempdir");

    // No header/footer directives at all
    let source = "# Notebook source\nprint(1)";
    let source_dir = root.path().join("Source");
    std::fs::create_dir_all(&source_dir).expect("mkdirs");
    std::fs::write(source_dir.join("Version Info.py"), source).expect("write notebook");

    let config = r#"{
        "name": "Data Basics",
        "version": "1.0.0",
        "source_dir": "Source",
        "target_dir": "Target"
    }"#;
    let config_path = root.path().join("build.json");
    std::fs::write(&config_path, config).expect("write config");

    cw().arg("--root")
        .arg(root.path())
        .arg("publish")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED:    Version Info"))
        .stdout(predicate::str::contains("header directives"));

    assert!(!root.path().join("Target/Version Info.py").exists());
}
