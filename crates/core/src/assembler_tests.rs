// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

fn replacements(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn replaces_every_occurrence() {
    let mut diagnostics = Diagnostics::new();
    let result = replace_contents(
        "v{{version_number}} built from {{version_number}}",
        &replacements(&[("version_number", "1.2.3")]),
        &mut diagnostics,
    );
    assert_eq!(result, "v1.2.3 built from 1.2.3");
    assert!(diagnostics.errors.is_empty());
}

#[test]
fn unresolved_placeholder_is_a_hard_error() {
    let mut diagnostics = Diagnostics::new();
    replace_contents(
        "value: {{unknown_key}}",
        &replacements(&[("version_number", "1.2.3")]),
        &mut diagnostics,
    );
    assert_eq!(diagnostics.errors.len(), 1);
    assert_eq!(
        diagnostics.errors[0].message,
        "A mustache pattern was detected after all replacements were processed: {{unknown_key}}"
    );
}

#[test]
fn deprecated_icon_is_a_hard_error() {
    let mut diagnostics = Diagnostics::new();
    replace_contents(":BESTPRACTICE: always", &replacements(&[]), &mut diagnostics);
    assert_eq!(diagnostics.errors.len(), 1);
    assert_eq!(
        diagnostics.errors[0].message,
        "The deprecated :BESTPRACTICE: pattern was found after all replacements were processed."
    );
}

#[test]
fn plain_braces_are_not_placeholders() {
    let mut diagnostics = Diagnostics::new();
    let source = "d = {\"k\": 1}";
    let result = replace_contents(source, &replacements(&[]), &mut diagnostics);
    assert_eq!(result, source);
    assert!(diagnostics.errors.is_empty());
}

proptest! {
    #[test]
    fn known_keys_never_leak(value in "[a-z0-9.]{1,12}") {
        let mut diagnostics = Diagnostics::new();
        let result = replace_contents(
            "before {{version_number}} after",
            &replacements(&[("version_number", &value)]),
            &mut diagnostics,
        );
        prop_assert!(!result.contains("{{"));
        prop_assert!(diagnostics.errors.is_empty());
    }
}

// --- assembly ---------------------------------------------------------------

#[test]
fn assemble_joins_with_delimiter_under_header() {
    let commands = vec!["print(1)".to_string(), "print(2)".to_string()];
    let source = assemble(Language::Python, &commands);
    assert_eq!(
        source,
        "# Notebook source\nprint(1)\n# COMMAND ----------\nprint(2)\n\n"
    );
}

#[test]
fn assemble_magic_last_cell_gets_no_trailing_blank() {
    let commands = vec!["print(1)".to_string(), "# MAGIC %md\n# MAGIC done".to_string()];
    let source = assemble(Language::Python, &commands);
    assert!(source.ends_with("# MAGIC done"));
}

#[test]
fn assemble_empty_notebook_is_just_the_header() {
    let source = assemble(Language::Sql, &[]);
    assert_eq!(source, "-- Notebook source\n");
}

#[test]
fn round_trip_with_tokenizer() {
    let commands = vec!["# MAGIC %md\n# MAGIC hi".to_string(), "print(1)".to_string()];
    let source = assemble(Language::Python, &commands);
    let (header, cells) = crate::cell::split_cells(&source, Language::Python);
    assert_eq!(header, "# Notebook source");
    let texts: Vec<String> = cells.into_iter().map(|c| c.text.trim_end().to_string()).collect();
    assert_eq!(texts, vec!["# MAGIC %md\n# MAGIC hi", "print(1)"]);
}

// --- boilerplate cells ------------------------------------------------------

#[test]
fn header_cell_is_a_magic_cell() {
    let cell = header_cell(Language::Python);
    assert!(cell.starts_with("# MAGIC"));
    assert!(cell.contains("%md-sandbox"));
    for line in cell.lines() {
        assert!(line.starts_with("# MAGIC"));
    }
}

#[test]
fn footer_cell_carries_the_copyright() {
    let cell = footer_cell(Language::Sql);
    assert!(cell.starts_with("-- MAGIC %md-sandbox"));
    assert!(cell.contains(COPYRIGHT_HOLDER));
    assert!(cell.contains("All rights reserved."));
    assert!(cell.contains("target=\"_blank\""));
}
