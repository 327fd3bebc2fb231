// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn split_separates_header_and_cells() {
    let raw = "# Notebook source\n# MAGIC %md\n# MAGIC # Title\n\n# COMMAND ----------\n\nprint(1)\n";
    let (header, cells) = split_cells(raw, Language::Python);
    assert_eq!(header, "# Notebook source");
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].text, "# MAGIC %md\n# MAGIC # Title\n");
    assert_eq!(cells[1].text, "print(1)\n");
    assert_eq!(cells[0].index, 0);
    assert_eq!(cells[1].index, 1);
}

#[test]
fn split_without_header_line() {
    let raw = "print(1)\n\n# COMMAND ----------\n\nprint(2)";
    let (header, cells) = split_cells(raw, Language::Python);
    assert_eq!(header, "");
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].text, "print(1)\n");
}

#[test]
fn split_header_only_notebook() {
    let (header, cells) = split_cells("# Notebook source", Language::Python);
    assert_eq!(header, "# Notebook source");
    assert_eq!(cells.len(), 1);
    assert!(cells[0].is_empty());
}

#[test]
fn split_uses_language_specific_delimiter() {
    let raw = "-- Notebook source\nSELECT 1\n\n-- COMMAND ----------\n\nSELECT 2";
    let (header, cells) = split_cells(raw, Language::Sql);
    assert_eq!(header, "-- Notebook source");
    assert_eq!(cells.len(), 2);
    // The Python delimiter is not special in a SQL notebook
    let raw = "SELECT 1\n# COMMAND ----------\nSELECT 2";
    let (_, cells) = split_cells(raw, Language::Sql);
    assert_eq!(cells.len(), 1);
}

#[test]
fn leading_comments_plain_cell() {
    let command = "# TODO\n# Fill in the blank below\nresult = FILL_IN";
    let comments = leading_comments(Language::Python, command);
    assert_eq!(comments, vec!["TODO", "Fill in the blank below"]);
}

#[test]
fn leading_comments_stop_at_code() {
    let command = "# first\nprint(1)\n# not leading";
    let comments = leading_comments(Language::Python, command);
    assert_eq!(comments, vec!["first"]);
}

#[test]
fn blank_comment_line_does_not_end_the_scan() {
    let command = "# first\n#\n\n# second\nprint(1)";
    let comments = leading_comments(Language::Python, command);
    assert_eq!(comments, vec!["first", "second"]);
}

#[test]
fn magic_cell_uses_cell_level_marker() {
    // A SQL cell inside a Python notebook comments with --
    let command = "# MAGIC %sql\n# MAGIC -- ANSWER\n# MAGIC SELECT 1";
    let comments = leading_comments(Language::Python, command);
    assert_eq!(comments, vec!["ANSWER"]);
}

#[test]
fn magic_token_is_stripped_from_first_line() {
    let command = "# MAGIC %md -- INCLUDE_HEADER_TRUE\n# MAGIC -- INCLUDE_FOOTER_TRUE";
    let comments = leading_comments(Language::Python, command);
    assert_eq!(comments, vec!["INCLUDE_HEADER_TRUE", "INCLUDE_FOOTER_TRUE"]);
}

#[test]
fn run_cell_is_not_an_r_cell() {
    // %run keeps the source marker, so the target line is not a comment
    let command = "# MAGIC %run ./Includes/Setup";
    let comments = leading_comments(Language::Python, command);
    assert!(comments.is_empty());
}

#[test]
fn empty_cell_has_no_comments() {
    assert!(leading_comments(Language::Python, "").is_empty());
}
