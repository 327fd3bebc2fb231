// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cell tokenizer and leading-comment extraction
//!
//! Splitting is textual: the serialized format guarantees the delimiter
//! line only occurs at cell boundaries, so no nesting awareness is needed.
//! Malformed content is not detected here; it surfaces later as directive
//! or classification errors.

use crate::language::Language;

/// One delimited unit of a notebook's source. Identity is the ordinal
/// plus the owning notebook's path; the ordinal is zero-based and only
/// ever shown to authors as `Cmd #{ordinal + 1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub text: String,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split raw notebook source into its header line and ordered cells.
///
/// The header line is returned separately so the assembler can emit a
/// fresh one; a missing header yields an empty string rather than an
/// error (legacy exports sometimes lack it).
pub fn split_cells(raw_source: &str, language: Language) -> (String, Vec<Cell>) {
    let delimiter = language.cell_delimiter();
    let expected_header = language.source_header();

    let mut chunks = raw_source.split(delimiter.as_str());
    let first = chunks.next().unwrap_or_default();

    let (header, first_cell) = match first.split_once('\n') {
        Some((line, rest)) if line.trim_end() == expected_header => (line.trim_end().to_string(), rest),
        _ if first.trim_end() == expected_header => (first.trim_end().to_string(), ""),
        _ => (String::new(), first),
    };

    let mut cells = Vec::new();
    cells.push(Cell {
        index: 0,
        text: first_cell.trim_start().to_string(),
    });
    for chunk in chunks {
        cells.push(Cell {
            index: cells.len(),
            text: chunk.trim_start().to_string(),
        });
    }

    (header, cells)
}

/// Collect the plain-text comment lines that precede the first
/// non-comment line of a cell. This is the substrate directives are
/// parsed from.
///
/// The scan strips the source-language `MAGIC`/`COMMAND` prefixes, then a
/// leading magic-command token, and then reads consecutive comment lines
/// using the cell-level marker. A blank comment line does not end the
/// scan; the first non-blank non-comment line does.
pub fn leading_comments(language: Language, command: &str) -> Vec<String> {
    let mut comments = Vec::new();

    let source_m = language.comment_marker();
    let lines: Vec<&str> = command.split('\n').collect();
    let first_line = lines.first().copied().unwrap_or("");
    let cell_m = language.cell_comment_marker(first_line);

    let magic_prefix = format!("{} MAGIC", source_m);
    let command_prefix = format!("{} COMMAND", source_m);

    for raw_line in lines {
        // Start by removing any "source" prefix
        let mut line = if raw_line.starts_with(&magic_prefix) {
            raw_line[magic_prefix.len()..].trim().to_string()
        } else if raw_line.starts_with(&command_prefix) {
            raw_line[command_prefix.len()..].trim().to_string()
        } else {
            raw_line.to_string()
        };

        // Next, if it starts with a magic command, remove it
        if line.trim().starts_with('%') {
            line = match line.find(' ') {
                None => String::new(),
                Some(pos) => line[pos..].trim().to_string(),
            };
        }

        // Finally process the refactored line for any comments
        let trimmed = line.trim();
        if trimmed == cell_m || trimmed.is_empty() {
            // empty comment line: don't break, just ignore
        } else if let Some(comment) = trimmed.strip_prefix(cell_m) {
            comments.push(comment.trim().to_string());
        } else {
            // all done, this is a non-comment
            return comments;
        }
    }

    comments
}

#[cfg(test)]
#[path = "cell_tests.rs"]
mod tests;
