// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-cell disposition state machine
//!
//! Each cell gets exactly one disposition, decided in a fixed priority
//! order. Cross-cell invariants (header/footer directives seen, the
//! TODO/ANSWER balance, GUID uniqueness) accumulate in [`NotebookState`]
//! across the single forward pass and are checked once at the end.

use crate::cell::Cell;
use crate::diagnostics::Diagnostics;
use crate::directive::Directive;
use crate::language::Language;
use tracing::debug;

/// Which edition(s) receive a cell, and in what form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Whitespace-only cell, dropped from every edition
    SkipEmpty,
    /// `SOURCE_ONLY` cell, kept in the authoring tree only
    SkipSourceOnly,
    /// Cell that exists to carry an `INCLUDE_HEADER_*` directive
    SkipHeaderMarker,
    /// Cell that exists to carry an `INCLUDE_FOOTER_*` directive
    SkipFooterMarker,
    /// `TODO` exercise stub, uncommented into the student edition
    StudentOnly,
    /// `ANSWER` cell, kept verbatim in the solutions edition
    SolutionOnly,
    /// `DUMMY` self-test cell, rewritten in the solutions copy
    DummyBoth,
    /// No directive matched; both editions get the cell unchanged
    PassthroughBoth,
}

/// Running flags and counters accumulated across one notebook's cells
#[derive(Debug, Clone, Default)]
pub struct NotebookState {
    pub todo_count: usize,
    pub answer_count: usize,
    pub include_header: bool,
    pub found_header_directive: bool,
    pub include_footer: bool,
    pub found_footer_directive: bool,
    pub i18n_guids: Vec<String>,
    pub skipped: usize,
}

impl NotebookState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Decide a cell's disposition and fold its directives into the running
/// state. Also enforces the at-most-one-content-directive rule.
pub fn classify_cell(
    cell: &Cell,
    directives: &[Directive],
    state: &mut NotebookState,
    diagnostics: &mut Diagnostics,
) -> Disposition {
    let i = cell.index;

    // Both the TRUE and FALSE variants satisfy "directive seen"; only
    // TRUE turns the boilerplate on.
    if directives.contains(&Directive::IncludeHeaderTrue) {
        state.include_header = true;
    }
    if directives.contains(&Directive::IncludeHeaderTrue)
        || directives.contains(&Directive::IncludeHeaderFalse)
    {
        state.found_header_directive = true;
    }
    if directives.contains(&Directive::IncludeFooterTrue) {
        state.include_footer = true;
    }
    if directives.contains(&Directive::IncludeFooterTrue)
        || directives.contains(&Directive::IncludeFooterFalse)
    {
        state.found_footer_directive = true;
    }

    let content_count = directives.iter().filter(|d| !d.is_header_footer()).count();
    let listed: Vec<&str> = directives.iter().map(|d| d.as_str()).collect();
    diagnostics.check(
        content_count <= 1,
        format!(
            "Cmd #{} | Found multiple directives ({}): {:?}",
            i + 1,
            content_count,
            listed
        ),
    );

    let disposition = if cell.is_empty() {
        debug!("Cmd #{} | Skipping: Empty Cell", i + 1);
        Disposition::SkipEmpty
    } else if directives.contains(&Directive::SourceOnly) {
        Disposition::SkipSourceOnly
    } else if directives.contains(&Directive::IncludeHeaderTrue)
        || directives.contains(&Directive::IncludeHeaderFalse)
    {
        Disposition::SkipHeaderMarker
    } else if directives.contains(&Directive::IncludeFooterTrue)
        || directives.contains(&Directive::IncludeFooterFalse)
    {
        Disposition::SkipFooterMarker
    } else if directives.contains(&Directive::Todo) {
        state.todo_count += 1;
        Disposition::StudentOnly
    } else if directives.contains(&Directive::Answer) {
        state.answer_count += 1;
        Disposition::SolutionOnly
    } else if directives.contains(&Directive::Dummy) {
        Disposition::DummyBoth
    } else {
        Disposition::PassthroughBoth
    };

    if matches!(
        disposition,
        Disposition::SkipEmpty
            | Disposition::SkipSourceOnly
            | Disposition::SkipHeaderMarker
            | Disposition::SkipFooterMarker
    ) {
        state.skipped += 1;
    }

    disposition
}

/// Uncomment a `TODO` exercise cell for the student edition.
///
/// The source form keeps the stub fully commented out so the authoring
/// notebook stays runnable; publishing strips exactly one marker-prefix
/// per line. Any line that is neither blank, the bare magic line, nor
/// prefixed with the expected marker is a hard error.
pub fn clean_todo_cell(language: Language, command: &str, i: usize, diagnostics: &mut Diagnostics) -> String {
    let source_m = language.comment_marker();
    let lines: Vec<&str> = command.split('\n').collect();

    let mut first = 0usize;
    let mut prefix = source_m.to_string();

    let magics: [(&str, &str); 5] = [
        ("%r", "#"),
        ("%md", "--"),
        ("%sql", "--"),
        ("%python", "#"),
        ("%scala", "//"),
    ];
    for (tag, cell_m) in magics {
        let magic_form = format!("{} MAGIC {}", source_m, tag);
        let line_zero = lines.first().copied().unwrap_or_default();
        if lines.len() > 1 && (line_zero.starts_with(tag) || line_zero.starts_with(&magic_form)) {
            first = 1;
            prefix = format!("{} MAGIC {}", source_m, cell_m);
        }
    }

    let directive_line = format!("{} TODO", prefix);
    let bare_magic = format!("{} MAGIC", source_m);
    let commented = format!("{} ", prefix);

    let mut new_lines: Vec<String> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if index == 0 && first == 1 {
            // The first line is a magic command, keep it
            new_lines.push(line.to_string());
        } else if index == first && trimmed != directive_line {
            diagnostics.error(format!(
                "Cmd #{} | Expected line #{} to be the \"TODO\" directive: \"{}\"",
                i + 1,
                index + 1,
                line
            ));
            new_lines.push(String::new());
        } else if !line.starts_with(&prefix) && !trimmed.is_empty() && trimmed != bare_magic {
            diagnostics.error(format!(
                "Cmd #{} | Expected line #{} to be commented out: \"{}\" with prefix \"{}\"",
                i + 1,
                index + 1,
                line,
                prefix
            ));
            new_lines.push(String::new());
        } else if trimmed.starts_with(&directive_line) {
            // The directive line stays, fencing the stub
            new_lines.push(line.to_string());
        } else if trimmed.is_empty() || trimmed == bare_magic {
            new_lines.push(line.to_string());
        } else if trimmed.starts_with(&commented) {
            // Remove comment and space
            new_lines.push(line[commented.len()..].to_string());
        } else {
            // Remove just the comment
            new_lines.push(line[prefix.len()..].to_string());
        }
    }

    new_lines.join("\n")
}

/// The message spliced over `DUMMY` in the solutions copy, used only by
/// the engine's own self-tests.
pub const DUMMY_REPLACEMENT: &str =
    "DUMMY: Ya, that wasn't too smart. Then again, this is just a dummy-directive";

/// The solutions-edition rewrite of a `DUMMY` cell
pub fn dummy_solution_cell(command: &str) -> String {
    command.replace(Directive::Dummy.as_str(), DUMMY_REPLACEMENT)
}

/// End-of-notebook invariants, checked once after every cell is
/// classified
pub fn check_final_state(state: &NotebookState, diagnostics: &mut Diagnostics) {
    diagnostics.check(
        state.found_header_directive,
        format!(
            "One of the two header directives ({} or {}) were not found.",
            Directive::IncludeHeaderTrue,
            Directive::IncludeHeaderFalse
        ),
    );
    diagnostics.check(
        state.found_footer_directive,
        format!(
            "One of the two footer directives ({} or {}) were not found.",
            Directive::IncludeFooterTrue,
            Directive::IncludeFooterFalse
        ),
    );
    diagnostics.check(
        state.answer_count >= state.todo_count,
        format!(
            "Found more {} commands ({}) than {} commands ({})",
            Directive::Todo,
            state.todo_count,
            Directive::Answer,
            state.answer_count
        ),
    );
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
