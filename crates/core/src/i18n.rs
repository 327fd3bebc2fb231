// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! i18n GUID validation, resource bundles, and translation splicing
//!
//! When i18n is enabled, every Markdown cell's first line must carry a
//! `--i18n-<id>` token after its `%md`/`%md-sandbox` tag. The GUID is
//! metadata only: the student/solutions editions strip it, the extractor
//! keys translatable segments by it, and the translator uses it to splice
//! replacement text back in.

use crate::diagnostics::Diagnostics;
use crate::language::Language;
use std::collections::BTreeMap;
use thiserror::Error;

/// The token prefix marking a translatable segment id
pub const GUID_PREFIX: &str = "--i18n-";

const SEGMENT_MARKER: &str = "<hr>--i18n-";
const SEGMENT_MARKER_SANDBOX: &str = "<hr sandbox>--i18n-";

/// Translated text keyed by bare segment id
pub type SegmentMap = BTreeMap<String, String>;

/// A parsed per-notebook, per-language resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    /// The file's first line, which names the notebook it belongs to
    pub path_line: String,
    pub segments: SegmentMap,
}

/// Errors reading a resource bundle file
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("line {line} precedes the first i18n segment marker")]
    OrphanLine { line: usize },
}

impl ResourceBundle {
    /// Parse the flat segment format: a path line, then segments
    /// introduced by `<hr>--i18n-<id>` or `<hr sandbox>--i18n-<id>`
    /// marker lines, each body running to the next marker or EOF.
    pub fn parse(content: &str) -> Result<Self, BundleError> {
        let mut path_line = String::new();
        let mut segments = SegmentMap::new();
        let mut current: Option<String> = None;

        for (i, line) in content.lines().enumerate() {
            if i == 0 {
                path_line = line.to_string();
            } else if let Some(guid) = line.strip_prefix(SEGMENT_MARKER) {
                let guid = guid.trim().to_string();
                segments.entry(guid.clone()).or_default();
                current = Some(guid);
            } else if let Some(guid) = line.strip_prefix(SEGMENT_MARKER_SANDBOX) {
                let guid = guid.trim().to_string();
                segments.entry(guid.clone()).or_default();
                current = Some(guid);
            } else {
                match &current {
                    None => return Err(BundleError::OrphanLine { line: i + 1 }),
                    Some(guid) => {
                        if let Some(contents) = segments.get_mut(guid) {
                            contents.push_str(line);
                            contents.push('\n');
                        }
                    }
                }
            }
        }

        Ok(Self { path_line, segments })
    }
}

/// Build the resource bundle text for one notebook from its Markdown
/// cells: `MAGIC` prefixes drop away and the magic line becomes a
/// segment marker.
pub fn extract_bundle(language: Language, path: &str, md_commands: &[String]) -> String {
    let magic_prefix = format!("{} MAGIC ", language.comment_marker());

    let mut bundle = format!("# /{}\n", path);
    for command in md_commands {
        let text = command
            .replace(&magic_prefix, "")
            .replace("%md-sandbox --i18n-", SEGMENT_MARKER_SANDBOX)
            .replace("%md --i18n-", SEGMENT_MARKER);
        bundle.push_str(&text);
        bundle.push('\n');
    }
    bundle
}

/// Validate one Markdown cell's i18n header and rewrite the cell.
///
/// In the publish flow (`translations` is `None`) the GUID line collapses
/// to a bare `%md`/`%md-sandbox` line. In the translator flow the whole
/// body is replaced by the translated segment text; a missing segment is
/// a hard error for the owning cell.
///
/// Returns the rewritten cell text; on any validation error the original
/// text is returned unchanged.
pub fn process_md_cell(
    language: Language,
    i: usize,
    command: &str,
    seen_guids: &mut Vec<String>,
    translations: Option<&SegmentMap>,
    diagnostics: &mut Diagnostics,
) -> String {
    let cm = language.comment_marker();
    let lines: Vec<&str> = command.trim().split('\n').collect();
    let line_zero = lines.first().copied().unwrap_or_default();
    // Everything after "{cm} MAGIC "
    let debug_info = &line_zero[(cm.len() + 7).min(line_zero.len())..];

    let parts: Vec<&str> = debug_info.split_whitespace().collect();
    let md_tag = parts.first().copied().unwrap_or_default();
    let guid = parts.get(1).copied().unwrap_or_default();

    let mut passed = diagnostics.check(
        lines.len() > 1,
        format!(
            "Cmd #{} | Expected MD to have more than 1 line of code with i18n enabled: {}",
            i + 1,
            debug_info
        ),
    );

    if parts.len() == 1 {
        if passed {
            diagnostics.error(format!("Cmd #{} | Missing the i18n directive: {}", i + 1, debug_info));
        }
        passed = false;
    } else {
        if passed {
            passed = diagnostics.check(
                parts.len() == 2,
                format!(
                    "Cmd #{} | Expected the first line of MD to have only two words, found {}: {}",
                    i + 1,
                    parts.len(),
                    debug_info
                ),
            );
        }
        if passed {
            passed = diagnostics.check(
                md_tag == "%md" || md_tag == "%md-sandbox",
                format!(
                    "Cmd #{} | Expected word[0] of the first line of MD to be \"%md\" or \"%md-sandbox\", found {}: {}",
                    i + 1,
                    md_tag,
                    debug_info
                ),
            );
        }
        if passed {
            passed = diagnostics.check(
                guid.starts_with(GUID_PREFIX),
                format!(
                    "Cmd #{} | Expected word[1] of the first line of MD to start with \"{}\", found {}: {}",
                    i + 1,
                    GUID_PREFIX,
                    guid,
                    debug_info
                ),
            );
        }
    }

    if passed {
        passed = diagnostics.check(
            !seen_guids.iter().any(|g| g.as_str() == guid),
            format!("Cmd #{} | Duplicate i18n GUID found: {}", i + 1, guid),
        );
    }

    if !passed {
        return command.to_string();
    }

    seen_guids.push(guid.to_string());

    if let Some(translations) = translations {
        let id = &guid[GUID_PREFIX.len()..];
        return match translations.get(id) {
            None => {
                diagnostics.error(format!("Cmd #{} | No translation found for GUID: {}", i + 1, guid));
                command.to_string()
            }
            Some(translated) => splice_translation(cm, md_tag, translated),
        };
    }

    // The GUID is metadata only; published editions carry a bare tag
    let mut rewritten = vec![format!("{} MAGIC {}", cm, md_tag)];
    rewritten.extend(lines[1..].iter().map(|l| l.to_string()));
    rewritten.join("\n")
}

fn splice_translation(cm: &str, md_tag: &str, translated: &str) -> String {
    let mut rewritten = vec![format!("{} MAGIC {}", cm, md_tag)];
    for line in translated.trim_end_matches('\n').split('\n') {
        if line.is_empty() {
            rewritten.push(format!("{} MAGIC", cm));
        } else {
            rewritten.push(format!("{} MAGIC {}", cm, line));
        }
    }
    rewritten.join("\n")
}

#[cfg(test)]
#[path = "i18n_tests.rs"]
mod tests;
