// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edition assembly and template substitution
//!
//! The assembler joins a filtered cell sequence back into publishable
//! source text, prepends the source-file header line, and resolves
//! `{{key}}` template variables. Published output must not ship an
//! unresolved marker, so any surviving mustache pattern or deprecated
//! icon placeholder is a hard error.

use crate::checks::COPYRIGHT_HOLDER;
use crate::diagnostics::Diagnostics;
use crate::language::Language;
use chrono::Datelike;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static MUSTACHE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[a-zA-Z\-\\_#/]*\}\}").expect("constant regex pattern is valid")
});

/// Icon placeholders from the retired template system
const DEPRECATED_ICONS: [&str; 5] = [":HINT:", ":CAUTION:", ":BESTPRACTICE:", ":SIDENOTE:", ":NOTE:"];

/// Substitute every `{{key}}` placeholder, then scan for leftovers.
pub fn replace_contents(
    contents: &str,
    replacements: &BTreeMap<String, String>,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut contents = contents.to_string();
    for (key, value) in replacements {
        let placeholder = format!("{{{{{}}}}}", key);
        contents = contents.replace(&placeholder, value);
    }

    if let Some(found) = MUSTACHE_PATTERN.find(&contents) {
        diagnostics.error(format!(
            "A mustache pattern was detected after all replacements were processed: {}",
            found.as_str()
        ));
    }

    for icon in DEPRECATED_ICONS {
        if contents.contains(icon) {
            diagnostics.error(format!(
                "The deprecated {} pattern was found after all replacements were processed.",
                icon
            ));
        }
    }

    contents
}

/// Join one edition's cells into final source text.
///
/// Cells are joined with the language delimiter under the source-file
/// header line. A trailing blank section is only added when the last
/// cell is not a magic cell, mirroring how the authoring platform
/// serializes notebooks.
pub fn assemble(language: Language, commands: &[String]) -> String {
    let m = language.comment_marker();
    let mut final_source = format!("{}\n", language.source_header());

    let Some((last, head)) = commands.split_last() else {
        return final_source;
    };

    for command in head {
        final_source.push_str(command);
        final_source.push_str(&language.cell_delimiter());
    }
    final_source.push_str(last);
    if !last.starts_with(&format!("{} MAGIC", m)) {
        final_source.push_str("\n\n");
    }

    final_source
}

/// The boilerplate banner cell prepended when `INCLUDE_HEADER_TRUE` was
/// seen
pub fn header_cell(language: Language) -> String {
    let m = language.comment_marker();
    [
        format!("{} MAGIC", m),
        format!("{} MAGIC %md-sandbox", m),
        format!("{} MAGIC", m),
        format!(
            "{} MAGIC <div style=\"text-align: center; line-height: 0; padding-top: 9px;\">",
            m
        ),
        format!(
            "{} MAGIC   <img src=\"https://training.alfredjean.dev/images/courseware-banner.png\" alt=\"Courseware\" style=\"width: 600px\">",
            m
        ),
        format!("{} MAGIC </div>", m),
    ]
    .join("\n")
}

/// The boilerplate copyright cell appended when `INCLUDE_FOOTER_TRUE`
/// was seen
pub fn footer_cell(language: Language) -> String {
    let m = language.comment_marker();
    let year = chrono::Utc::now().year();
    [
        format!("{} MAGIC %md-sandbox", m),
        format!(
            "{} MAGIC &copy; {} {}. All rights reserved.<br/>",
            m, year, COPYRIGHT_HOLDER
        ),
        format!("{} MAGIC <br/>", m),
        format!(
            "{} MAGIC <a href=\"https://training.alfredjean.dev/privacy\" target=\"_blank\">Privacy Policy</a> | <a href=\"https://training.alfredjean.dev/terms\" target=\"_blank\">Terms of Use</a> | <a href=\"https://training.alfredjean.dev/support\" target=\"_blank\">Support</a>",
            m
        ),
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
