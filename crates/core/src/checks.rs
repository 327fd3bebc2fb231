// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-cell content checks independent of cell disposition
//!
//! Each check appends to the notebook's diagnostics and never aborts the
//! pass. Several are suppressible per warning category via the build or
//! notebook `ignoring` sets.

use crate::config::PublishConfig;
use crate::diagnostics::Diagnostics;
use crate::language::Language;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// The cell-title marker is an editor affordance and must not leak into
/// published content.
pub const CELL_TITLE_MARKER: &str = "NBTITLE";

/// Content markers from the retired build system. Their presence means a
/// notebook was migrated incompletely.
pub const FORBIDDEN_TOKENS: [&str; 18] = [
    "IPYTHON_ONLY",
    "AMAZON_ONLY",
    "AZURE_ONLY",
    "GCP_ONLY",
    "TEST",
    "PRIVATE_TEST",
    "INSTRUCTOR_NOTE",
    "INSTRUCTOR_ONLY",
    "SCALA_ONLY",
    "PYTHON_ONLY",
    "SQL_ONLY",
    "R_ONLY",
    "VIDEO",
    "ILT_ONLY",
    "SELF_PACED_ONLY",
    "INLINE",
    "NEW_PART",
    "{runtime}",
];

/// Copyright notices are stamped into the footer at publish time; any
/// notice already present in a source cell is a stale leak.
pub const COPYRIGHT_HOLDER: &str = "Alfred Jean LLC";

/// Dataset mount points that retired courses referenced and current
/// content must not.
pub const PROHIBITED_DATASETS: [&str; 2] = ["/mnt/training", "/shared-datasets"];

const INVALID_NAME_CHARS: [char; 8] = ['"', '*', '<', '>', '?', '\\', '|', ':'];

#[allow(clippy::expect_used)]
static COPYRIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(\d{{4}}) {}", regex::escape(COPYRIGHT_HOLDER)))
        .expect("constant regex pattern is valid")
});

/// Error on the editor-only cell-title marker
pub fn check_cell_title(i: usize, command: &str, diagnostics: &mut Diagnostics) {
    diagnostics.check(
        !command.contains(CELL_TITLE_MARKER),
        format!("Cmd #{} | Unsupported Cell-Title found", i + 1),
    );
}

/// Error on every forbidden legacy token present in the cell
pub fn check_forbidden_tokens(i: usize, command: &str, diagnostics: &mut Diagnostics) {
    for token in FORBIDDEN_TOKENS {
        diagnostics.check(
            !command.contains(token),
            format!("Cmd #{} | Found the token \"{}\"", i + 1, token),
        );
    }
}

/// Error on stale copyright notices, one per distinct year found
pub fn check_copyright(i: usize, command: &str, diagnostics: &mut Diagnostics) {
    let mut years: BTreeSet<u32> = BTreeSet::new();
    for capture in COPYRIGHT_PATTERN.captures_iter(command) {
        if let Some(year) = capture.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
            if (2017..2999).contains(&year) {
                years.insert(year);
            }
        }
    }
    for year in years {
        diagnostics.error(format!(
            "Cmd #{} | Found copyright ({} {})",
            i + 1,
            year,
            COPYRIGHT_HOLDER
        ));
    }
}

/// Warn on references to prohibited dataset mount points
pub fn check_dataset_paths(
    i: usize,
    command: &str,
    config: &PublishConfig,
    extra_ignoring: &[String],
    diagnostics: &mut Diagnostics,
) {
    if config.is_ignoring("prohibited-dataset", extra_ignoring) {
        return;
    }
    for what in PROHIBITED_DATASETS {
        if let Some(pos) = command.find(what) {
            let start = command[..pos].rfind('\n').map(|p| p + 1).unwrap_or(0);
            let end = command[pos..].find('\n').map(|p| pos + p).unwrap_or(command.len());
            let line = command[start..end].trim();

            let prefix = format!("Cmd #{} ", i + 1);
            let padding = " ".repeat(prefix.len());
            diagnostics.warn(format!(
                "{}| Course includes prohibited use of {}:\n{}| {}",
                prefix, what, padding, line
            ));
        }
    }
}

/// Warn when a cell restates the notebook's own language as a magic tag.
/// Markdown cells are exempt; the check is suppressible per language.
pub fn check_magic_leak(
    language: Language,
    i: usize,
    command: &str,
    config: &PublishConfig,
    extra_ignoring: &[String],
    diagnostics: &mut Diagnostics,
) {
    let md_prefix = format!("{} MAGIC %md", language.comment_marker());
    if command.starts_with(&md_prefix) {
        return;
    }

    match language {
        Language::Python => {
            if !config.is_ignoring("lang-python", extra_ignoring) {
                diagnostics.check_warn(
                    !command.contains("%python"),
                    format!("Cmd #{} | Found \"%python\" in a Python notebook", i + 1),
                );
            }
        }
        Language::Sql => {
            if !config.is_ignoring("lang-sql", extra_ignoring) {
                diagnostics.check_warn(
                    !command.contains("%sql"),
                    format!("Cmd #{} | Found \"%sql\" in a SQL notebook", i + 1),
                );
            }
        }
        Language::Scala => {
            if !config.is_ignoring("lang-scala", extra_ignoring) {
                diagnostics.check_warn(
                    !command.contains("%scala"),
                    format!("Cmd #{} | Found \"%scala\" in a Scala notebook", i + 1),
                );
            }
        }
        Language::R => {
            // Both forms checked so %run is not caught by accident
            if !config.is_ignoring("lang-r", extra_ignoring) {
                diagnostics.check_warn(
                    !command.contains("%r "),
                    format!("Cmd #{} | Found \"%r\" in an R notebook", i + 1),
                );
                diagnostics.check_warn(
                    !command.contains("%r\n"),
                    format!("Cmd #{} | Found \"%r\" in an R notebook", i + 1),
                );
            }
        }
    }
}

/// Warn on notebook-path characters the hosting platform rejects.
/// Forward slash is not checked; the platform enforces it natively.
pub fn check_notebook_name(path: &str, diagnostics: &mut Diagnostics) {
    for key in INVALID_NAME_CHARS {
        diagnostics.check_warn(
            !path.contains(key),
            format!("Found invalid character {} in notebook name: {}", key, path),
        );
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
