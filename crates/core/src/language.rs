// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notebook languages and cell-level magic tags
//!
//! A notebook has exactly one source language, which fixes the comment
//! marker used for the cell delimiter and the `MAGIC` prefix. Individual
//! cells may open with a magic tag (`%md`, `%sql`, ...) that switches the
//! comment marker used *inside* that cell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a notebook declares a language the engine has no
/// comment-marker mapping for. This aborts the whole run, not just one
/// notebook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("The language {0} is not supported.")]
pub struct UnsupportedLanguage(pub String);

/// Source language of a notebook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Sql,
    Scala,
    R,
}

impl Language {
    /// The line-comment marker of the source language
    pub fn comment_marker(&self) -> &'static str {
        match self {
            Language::Python | Language::R => "#",
            Language::Sql => "--",
            Language::Scala => "//",
        }
    }

    /// The literal line separating two cells in the raw source
    pub fn cell_delimiter(&self) -> String {
        format!("\n{} COMMAND ----------\n", self.comment_marker())
    }

    /// The first line of every serialized notebook
    pub fn source_header(&self) -> String {
        format!("{} Notebook source", self.comment_marker())
    }

    /// The prefix carried by every continuation line of a magic cell
    pub fn magic_prefix(&self) -> String {
        format!("{} MAGIC", self.comment_marker())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Sql => "sql",
            Language::Scala => "scala",
            Language::R => "r",
        }
    }

    /// Determine the comment marker in effect inside one cell.
    ///
    /// A leading magic tag switches the marker (`%sql` inside a Python
    /// notebook comments with `--`). `%run` keeps the source marker so R
    /// notebooks do not mistake it for `%r`.
    pub fn cell_comment_marker(&self, first_line: &str) -> &'static str {
        let first_line = first_line.to_lowercase();
        let magic = |tag: &str| first_line.starts_with(&format!("{} magic {}", self.comment_marker(), tag));

        if magic("%md") {
            Magic::Md.comment_marker()
        } else if magic("%sql") {
            Magic::Sql.comment_marker()
        } else if magic("%python") {
            Magic::Python.comment_marker()
        } else if magic("%scala") {
            Magic::Scala.comment_marker()
        } else if magic("%run") {
            self.comment_marker()
        } else if magic("%r") {
            Magic::R.comment_marker()
        } else {
            self.comment_marker()
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('%').to_lowercase().as_str() {
            "python" => Ok(Language::Python),
            "sql" => Ok(Language::Sql),
            "scala" => Ok(Language::Scala),
            "r" => Ok(Language::R),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// A cell-level magic tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magic {
    Md,
    MdSandbox,
    Sql,
    Python,
    Scala,
    R,
    Run,
}

impl Magic {
    /// The comment marker of the sub-language the tag switches to
    pub fn comment_marker(&self) -> &'static str {
        match self {
            Magic::Md | Magic::MdSandbox | Magic::Sql => "--",
            Magic::Python | Magic::R | Magic::Run => "#",
            Magic::Scala => "//",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Magic::Md => "%md",
            Magic::MdSandbox => "%md-sandbox",
            Magic::Sql => "%sql",
            Magic::Python => "%python",
            Magic::Scala => "%scala",
            Magic::R => "%r",
            Magic::Run => "%run",
        }
    }
}

#[cfg(test)]
#[path = "language_tests.rs"]
mod tests;
