// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-notebook link and `%run` target resolution
//!
//! Relative targets are resolved against the referencing notebook's own
//! path and tested for membership against every sibling notebook path and
//! ancestor directory (a `%run` may target a directory alias). Targets
//! that are not relative cannot be resolved and only warn.

use crate::config::PublishConfig;
use crate::diagnostics::Diagnostics;
use crate::language::Language;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static MD_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static RELATIVE_TARGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\$.*\)").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static HTML_ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a .*?</a>").expect("constant regex pattern is valid"));

/// The set of resolvable link targets in one source tree: every notebook
/// path plus every ancestor directory of one.
#[derive(Debug, Clone, Default)]
pub struct NotebookIndex {
    paths: BTreeSet<String>,
}

impl NotebookIndex {
    pub fn new<I, S>(notebook_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = BTreeSet::new();
        for path in notebook_paths {
            let path = path.as_ref();
            paths.insert(path.to_string());

            let mut directory = parent_of(path);
            paths.insert(directory.clone());
            while directory.contains('/') {
                directory = parent_of(&directory);
                paths.insert(directory.clone());
            }
        }
        Self { paths }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

fn parent_of(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

/// Resolve a relative target against the referencing notebook's path and
/// verify it names a known notebook or directory.
///
/// A target with no `../`/`./` prefix is ambiguous and warns; a resolved
/// target missing from the index errors, naming both forms.
pub fn check_target_exists(
    index: &NotebookIndex,
    notebook_path: &str,
    i: usize,
    what: &str,
    original_target: &str,
    target: &str,
    diagnostics: &mut Diagnostics,
) {
    if !target.starts_with("../") && !target.starts_with("./") {
        diagnostics.warn(format!(
            "Cmd #{} | Found unexpected, relative, {} target: \"{}\" resolved as \"{}\"",
            i + 1,
            what,
            original_target,
            target
        ));
        return;
    }

    let mut target = target.to_string();
    let mut ascend = 1usize;

    if target.starts_with("../") {
        while let Some(rest) = target.strip_prefix("../") {
            ascend += 1;
            target = rest.to_string();
        }
    } else if let Some(rest) = target.strip_prefix("./") {
        target = rest.to_string();
    }

    if notebook_path.contains('/') {
        let segments: Vec<&str> = notebook_path.split('/').collect();
        let keep = segments.len().saturating_sub(ascend);
        let parent = segments[..keep].join("/");
        target = format!("{}/{}", parent, target);
    }

    if let Some(rest) = target.strip_prefix('/') {
        target = rest.to_string();
    }

    diagnostics.check(
        index.contains(&target),
        format!(
            "Cmd #{} | Cannot find notebook for the {} target: \"{}\" resolved as \"{}\"",
            i + 1,
            what,
            original_target,
            target
        ),
    );
}

/// Validate the target of a `%run` cell. Quoted targets must close their
/// quote; unquoted targets end at the first space (trailing arguments are
/// legal).
pub fn check_run_cell(
    language: Language,
    i: usize,
    command: &str,
    index: &NotebookIndex,
    notebook_path: &str,
    diagnostics: &mut Diagnostics,
) {
    let prefix = format!("{} MAGIC %run", language.comment_marker());
    if !command.starts_with(&prefix) {
        return;
    }

    let line_zero = command.split('\n').next().unwrap_or_default();
    let mut link = line_zero[prefix.len()..].trim().to_string();

    if let Some(quoted) = link.strip_prefix('"') {
        match quoted.find('"') {
            None => {
                diagnostics.warn(format!("Cmd #{} | Missing closing quote in %run target", i + 1));
                return;
            }
            Some(pos) => link = quoted[..pos].to_string(),
        }
    } else if let Some(pos) = link.find(' ') {
        link = link[..pos].to_string();
    }

    check_target_exists(index, notebook_path, i, "%run", &link, &link, diagnostics);
}

/// Flag Markdown links: relative same-repo links (`($...)`) are resolved
/// against the index, anything else should be an HTML link instead.
/// Image links are exempt.
pub fn check_md_links(
    i: usize,
    command: &str,
    index: &NotebookIndex,
    notebook_path: &str,
    config: &PublishConfig,
    extra_ignoring: &[String],
    diagnostics: &mut Diagnostics,
) {
    for found in MD_LINK_PATTERN.find_iter(command) {
        // image links start with '!', which the pattern cannot see
        if found.start() > 0 && command.as_bytes()[found.start() - 1] == b'!' {
            continue;
        }
        let link = found.as_str();

        match RELATIVE_TARGET_PATTERN.find(link) {
            None => {
                if !config.is_ignoring("md-link", extra_ignoring) {
                    diagnostics.warn(format!(
                        "Cmd #{} | Found a MD link, expected HTML link: \"{}\"",
                        i + 1,
                        link
                    ));
                }
            }
            Some(matched) => {
                let inner = &matched.as_str()[1..matched.as_str().len() - 1];
                let target = &inner[1..];
                check_target_exists(index, notebook_path, i, "MD link", inner, target, diagnostics);
            }
        }
    }
}

/// Every HTML anchor must open in a new tab
pub fn check_html_links(i: usize, command: &str, diagnostics: &mut Diagnostics) {
    for found in HTML_ANCHOR_PATTERN.find_iter(command) {
        let link = found.as_str();
        diagnostics.check_warn(
            link.contains("target=\"_blank\""),
            format!(
                "Cmd #{} | Found HTML link without the required target=\"_blank\": \"{}\"",
                i + 1,
                link
            ),
        );
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
