// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The directive vocabulary and its parsing heuristic
//!
//! Directives are all-caps marker tokens standing alone on a leading
//! comment line. The parser has to pick them out of prose that is *also*
//! all-caps (SQL keywords, FILL_IN placeholder stubs) without silently
//! eating near-misses, so malformed attempts warn loudly instead of
//! being dropped. Existing course content depends on the exact accept,
//! ignore, and warn conditions below.

use crate::diagnostics::Diagnostics;
use std::fmt;

/// The closed set of recognized structural directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    SourceOnly,
    Todo,
    Answer,
    Dummy,
    IncludeHeaderTrue,
    IncludeHeaderFalse,
    IncludeFooterTrue,
    IncludeFooterFalse,
}

/// Every directive an author may use, in documentation order
pub const SUPPORTED_DIRECTIVES: [Directive; 8] = [
    Directive::SourceOnly,
    Directive::Answer,
    Directive::Todo,
    Directive::Dummy,
    Directive::IncludeHeaderTrue,
    Directive::IncludeHeaderFalse,
    Directive::IncludeFooterTrue,
    Directive::IncludeFooterFalse,
];

/// All-caps tokens that show up in leading comments without being
/// directives. `SELECT`/`FROM`/`AS`/`AND` are SQL, FILL_IN variants are
/// exercise placeholder stubs.
const SQL_KEYWORDS: [&str; 4] = ["SELECT", "FROM", "AS", "AND"];

impl Directive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::SourceOnly => "SOURCE_ONLY",
            Directive::Todo => "TODO",
            Directive::Answer => "ANSWER",
            Directive::Dummy => "DUMMY",
            Directive::IncludeHeaderTrue => "INCLUDE_HEADER_TRUE",
            Directive::IncludeHeaderFalse => "INCLUDE_HEADER_FALSE",
            Directive::IncludeFooterTrue => "INCLUDE_FOOTER_TRUE",
            Directive::IncludeFooterFalse => "INCLUDE_FOOTER_FALSE",
        }
    }

    /// Header/footer directives are additive; everything else is a
    /// content directive, of which a cell may carry at most one.
    pub fn is_header_footer(&self) -> bool {
        matches!(
            self,
            Directive::IncludeHeaderTrue
                | Directive::IncludeHeaderFalse
                | Directive::IncludeFooterTrue
                | Directive::IncludeFooterFalse
        )
    }

    fn from_token(token: &str) -> Option<Directive> {
        SUPPORTED_DIRECTIVES
            .iter()
            .copied()
            .find(|d| d.as_str() == token)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Replace every character outside `[-a-zA-Z_]` with an underscore.
/// A changed string means the token carried digits or punctuation and is
/// prose, not a directive.
fn normalize(token: &str) -> String {
    token
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// The directives recognized via the early-accept path. `DUMMY` is
/// deliberately absent: it only survives the warning gauntlet below,
/// which accepts it silently because it is in the supported set.
const EARLY_ACCEPT: [Directive; 7] = [
    Directive::Todo,
    Directive::Answer,
    Directive::SourceOnly,
    Directive::IncludeHeaderTrue,
    Directive::IncludeHeaderFalse,
    Directive::IncludeFooterTrue,
    Directive::IncludeFooterFalse,
];

/// Classify the leading comment lines of cell `i` into directives.
///
/// Lines that are not all-uppercase are ignored outright. All-uppercase
/// near-misses warn (embedded whitespace, embedded hyphen, unsupported
/// token) and are only accepted when every warning passes.
pub fn parse_directives(i: usize, comments: &[String], diagnostics: &mut Diagnostics) -> Vec<Directive> {
    let mut directives = Vec::new();

    for line in comments {
        if line != &line.to_uppercase() {
            continue;
        }

        // The comment is in all upper case, must be one or more directives
        let directive = line.trim();
        let mod_directive = normalize(directive);

        if SQL_KEYWORDS.contains(&directive) {
            // not a real directive, but flagged as one because of its SQL syntax
        } else if let Some(found) = EARLY_ACCEPT
            .iter()
            .copied()
            .find(|d| d.as_str() == directive)
        {
            directives.push(found);
        } else if directive.contains("FILL-IN") || directive.contains("FILL_IN") {
            // Not a directive, just a random chance
        } else if directive != mod_directive {
            if mod_directive == "__TODO" || mod_directive == "___TODO" {
                diagnostics.error(format!("Cmd #{} | Found double-comment of TODO directive", i + 1));
            }
            // Numbers and symbols are not used in directives
        } else {
            let result_a = diagnostics.check_warn(
                !directive.contains(' '),
                format!("Cmd #{} | Whitespace found in directive \"{}\": {}", i + 1, directive, line),
            );
            let result_b = diagnostics.check_warn(
                !directive.contains('-'),
                format!("Cmd #{} | Hyphen found in directive \"{}\": {}", i + 1, directive, line),
            );
            let supported = Directive::from_token(directive);
            let result_c = diagnostics.check_warn(
                supported.is_some(),
                format!(
                    "Cmd #{} | Unsupported directive \"{}\", see `cw directives` for more information.",
                    i + 1,
                    directive
                ),
            );
            if result_a && result_b && result_c {
                if let Some(found) = supported {
                    directives.push(found);
                }
            }
        }
    }

    directives
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
