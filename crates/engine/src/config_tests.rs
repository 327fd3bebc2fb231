// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn minimal_config_gets_defaults() {
    let config = BuildConfig::from_json(
        r#"{"name": "Data Basics", "version": "1.0.0", "source_dir": "Course/Source"}"#,
    )
    .expect("config parses");

    assert_eq!(config.name, "Data Basics");
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.mode, TargetMode::Overwrite);
    assert!(config.include_solutions);
    assert!(!config.i18n);
    assert!(config.ignoring.is_empty());
    assert_eq!(config.target_dir(), "Published/Data Basics - v1.0.0");
}

#[test]
fn explicit_target_dir_wins() {
    let config = BuildConfig::from_json(
        r#"{"name": "X", "version": "2.0.0", "source_dir": "S", "target_dir": "T"}"#,
    )
    .expect("config parses");
    assert_eq!(config.target_dir(), "T");
}

#[test]
fn notebook_overrides_parse() {
    let config = BuildConfig::from_json(
        r#"{
            "name": "X", "version": "1.0.0", "source_dir": "S",
            "notebook_config": {
                "Labs/Intro": {
                    "include_solution": false,
                    "replacements": {"course_name": "Intro"},
                    "ignored_errors": ["md-link"]
                }
            }
        }"#,
    )
    .expect("config parses");

    let overrides = config.overrides_for("Labs/Intro").expect("overrides");
    assert_eq!(overrides.include_solution, Some(false));
    assert_eq!(overrides.replacements["course_name"], "Intro");
    assert_eq!(overrides.ignored_errors, vec!["md-link"]);
    assert!(config.overrides_for("Other").is_none());
}

#[test]
fn mode_parses_kebab_case() {
    let config = BuildConfig::from_json(
        r#"{"name": "X", "version": "1", "source_dir": "S", "mode": "no-overwrite"}"#,
    )
    .expect("config parses");
    assert_eq!(config.mode, TargetMode::NoOverwrite);
}

#[test]
fn empty_name_rejected() {
    let err = BuildConfig::from_json(r#"{"name": "", "version": "1", "source_dir": "S"}"#);
    assert!(matches!(err, Err(PublishError::Config(_))));
}

#[test]
fn i18n_language_requires_i18n() {
    let err = BuildConfig::from_json(
        r#"{"name": "X", "version": "1", "source_dir": "S", "i18n_language": "french"}"#,
    );
    assert!(matches!(err, Err(PublishError::Config(_))));
}

#[test]
fn unknown_fields_rejected() {
    let err = BuildConfig::from_json(
        r#"{"name": "X", "version": "1", "source_dir": "S", "spark_legacy": true}"#,
    );
    assert!(matches!(err, Err(PublishError::ConfigParse(_))));
}
