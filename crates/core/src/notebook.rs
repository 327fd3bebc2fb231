// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One authored notebook and its single forward transformation pass
//!
//! The pass walks the cell stream once, in order: later cells' diagnostics
//! reference earlier running counters, and rewriting must preserve the
//! publish order. Classification produces new derived text per edition,
//! never in-place mutation, so the student and solutions editions stay
//! independent.

use crate::assembler;
use crate::cell::{self, Cell};
use crate::checks;
use crate::classifier::{self, Disposition, NotebookState};
use crate::config::PublishConfig;
use crate::diagnostics::Diagnostics;
use crate::directive;
use crate::i18n::{self, SegmentMap};
use crate::language::Language;
use crate::links::{self, NotebookIndex};
use std::collections::BTreeMap;
use tracing::debug;

/// One authored unit: identity (relative path), language, per-notebook
/// configuration, and template substitutions. Constructed once per
/// publish pass and discarded after the editions are written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookDocument {
    /// Relative path within the source tree; unique and stable
    pub path: String,
    pub language: Language,
    /// Per-notebook template variables, merged over the build-wide set
    pub replacements: BTreeMap<String, String>,
    /// Whether a solutions edition is emitted alongside the student one
    pub include_solution: bool,
    /// Extra suppressed warning categories, on top of the build's
    pub ignoring: Vec<String>,
}

/// The result of one notebook's forward pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutput {
    pub student_source: String,
    pub solutions_source: Option<String>,
    pub diagnostics: Diagnostics,
}

impl NotebookDocument {
    pub fn new(path: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            language,
            replacements: BTreeMap::new(),
            include_solution: true,
            ignoring: Vec::new(),
        }
    }

    /// The merged template variable map for this notebook
    fn merged_replacements(&self, config: &PublishConfig) -> BTreeMap<String, String> {
        let mut replacements = config.base_replacements();
        replacements.extend(self.replacements.clone());
        replacements
    }

    /// Run the full forward pass over the raw source and produce the
    /// target edition(s) plus every diagnostic found along the way.
    ///
    /// `translations` selects the translator flow: Markdown segment
    /// bodies are replaced via their GUIDs instead of merely stripping
    /// the GUID markers.
    pub fn publish_pass(
        &self,
        raw_source: &str,
        config: &PublishConfig,
        index: &NotebookIndex,
        translations: Option<&SegmentMap>,
    ) -> PublishOutput {
        let language = self.language;
        let md_prefix = format!("{} MAGIC %md", language.comment_marker());

        let mut diagnostics = Diagnostics::new();
        let mut state = NotebookState::new();
        let mut students: Vec<String> = Vec::new();
        let mut solutions: Vec<String> = Vec::new();

        let (_header, cells) = cell::split_cells(raw_source, language);

        for cell in &cells {
            let i = cell.index;
            let mut command = cell.text.clone();

            checks::check_cell_title(i, &command, &mut diagnostics);
            checks::check_dataset_paths(i, &command, config, &self.ignoring, &mut diagnostics);

            // Markdown-cell checks, with the i18n rewrite when enabled
            if command.starts_with(&md_prefix) {
                links::check_md_links(i, &command, index, &self.path, config, &self.ignoring, &mut diagnostics);
                links::check_html_links(i, &command, &mut diagnostics);
                if config.i18n {
                    command = i18n::process_md_cell(
                        language,
                        i,
                        &command,
                        &mut state.i18n_guids,
                        translations,
                        &mut diagnostics,
                    );
                }
            }

            links::check_run_cell(language, i, &command, index, &self.path, &mut diagnostics);

            let leading = cell::leading_comments(language, command.trim());
            let directives = directive::parse_directives(i, &leading, &mut diagnostics);

            let classified = Cell {
                index: i,
                text: command.clone(),
            };
            let disposition =
                classifier::classify_cell(&classified, &directives, &mut state, &mut diagnostics);

            match disposition {
                Disposition::SkipEmpty
                | Disposition::SkipSourceOnly
                | Disposition::SkipHeaderMarker
                | Disposition::SkipFooterMarker => {}
                Disposition::StudentOnly => {
                    let cleaned = classifier::clean_todo_cell(language, &command, i, &mut diagnostics);
                    students.push(cleaned);
                }
                Disposition::SolutionOnly => {
                    solutions.push(command.clone());
                }
                Disposition::DummyBoth => {
                    students.push(command.clone());
                    solutions.push(classifier::dummy_solution_cell(&command));
                }
                Disposition::PassthroughBoth => {
                    students.push(command.clone());
                    solutions.push(command.clone());
                }
            }

            checks::check_forbidden_tokens(i, &command, &mut diagnostics);
            checks::check_magic_leak(language, i, &command, config, &self.ignoring, &mut diagnostics);
            checks::check_copyright(i, &command, &mut diagnostics);
        }

        classifier::check_final_state(&state, &mut diagnostics);

        if state.include_header {
            students.insert(0, assembler::header_cell(language));
            solutions.insert(0, assembler::header_cell(language));
        }
        if state.include_footer {
            students.push(assembler::footer_cell(language));
            solutions.push(assembler::footer_cell(language));
        }

        checks::check_notebook_name(&self.path, &mut diagnostics);

        debug!(
            path = %self.path,
            cells = cells.len(),
            skipped = state.skipped,
            students = students.len(),
            solutions = solutions.len(),
            "classified notebook"
        );

        let replacements = self.merged_replacements(config);
        let student_source = assembler::replace_contents(
            &assembler::assemble(language, &students),
            &replacements,
            &mut diagnostics,
        );
        let solutions_source = if self.include_solution {
            Some(assembler::replace_contents(
                &assembler::assemble(language, &solutions),
                &replacements,
                &mut diagnostics,
            ))
        } else {
            None
        };

        PublishOutput {
            student_source,
            solutions_source,
            diagnostics,
        }
    }

    /// Collect this notebook's Markdown cells into a translatable
    /// resource bundle. Returns `None` when there is nothing to
    /// translate.
    pub fn extract_resources(
        &self,
        raw_source: &str,
        config: &PublishConfig,
    ) -> Option<(String, Diagnostics)> {
        let language = self.language;
        let md_prefix = format!("{} MAGIC %md", language.comment_marker());
        let (_header, cells) = cell::split_cells(raw_source, language);

        let md_commands: Vec<String> = cells
            .into_iter()
            .filter(|c| c.text.starts_with(&md_prefix))
            .map(|c| c.text)
            .collect();

        if md_commands.is_empty() {
            debug!(path = %self.path, "skipping resource - 0 MD cells");
            return None;
        }

        let mut diagnostics = Diagnostics::new();
        let bundle = i18n::extract_bundle(language, &self.path, &md_commands);
        let bundle = assembler::replace_contents(
            &bundle,
            &self.merged_replacements(config),
            &mut diagnostics,
        );
        Some((bundle, diagnostics))
    }
}

#[cfg(test)]
#[path = "notebook_tests.rs"]
mod tests;
