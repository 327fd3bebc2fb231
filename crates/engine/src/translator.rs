// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The translator: localized editions from resource bundles
//!
//! Reads the per-language flat-file resource store, splices translated
//! segment text into each notebook by GUID, and publishes the localized
//! editions. A notebook with no bundle, a bundle naming the wrong
//! notebook, or a missing segment fails that notebook.

use crate::config::BuildConfig;
use crate::error::PublishError;
use crate::publisher::{write_editions, NotebookReport, PublishSummary, Publisher};
use cw_core::{Diagnostics, NotebookDocument, ResourceBundle, WorkspaceAdapter};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Publishes one localized edition of a course
pub struct Translator<W: WorkspaceAdapter> {
    publisher: Publisher<W>,
    workspace: W,
    source_dir: String,
    target_dir: String,
    resources_root: PathBuf,
    language: String,
    /// Top-level directories whose bundles skip the path sanity check
    excluded_dirs: Vec<String>,
}

impl<W: WorkspaceAdapter> Translator<W> {
    /// Discover the source tree; the build must name an i18n language.
    pub async fn discover(
        workspace: W,
        build: BuildConfig,
        resources_root: impl Into<PathBuf>,
    ) -> Result<Self, PublishError> {
        let language = build
            .i18n_language
            .clone()
            .ok_or_else(|| PublishError::Config("The i18n language must be specified.".into()))?;

        let source_dir = build.source_dir.clone();
        let target_dir = build.target_dir();
        let publisher = Publisher::discover(workspace.clone(), build).await?;

        Ok(Self {
            publisher,
            workspace,
            source_dir,
            target_dir,
            resources_root: resources_root.into().join(&language),
            language,
            excluded_dirs: Vec::new(),
        })
    }

    pub fn with_excluded_dirs(mut self, excluded_dirs: Vec<String>) -> Self {
        self.excluded_dirs = excluded_dirs;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Publish the localized edition of every notebook
    pub async fn translate(&self) -> Result<PublishSummary, PublishError> {
        let mut reports = Vec::new();
        for notebook in self.publisher.main_notebooks() {
            reports.push(self.translate_notebook(&notebook).await?);
        }
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(PublishSummary {
            build_id: self.publisher.build_id().to_string(),
            reports,
        })
    }

    async fn translate_notebook(
        &self,
        notebook: &NotebookDocument,
    ) -> Result<NotebookReport, PublishError> {
        let mut diagnostics = Diagnostics::new();
        let bundle = self.load_bundle(notebook, &mut diagnostics);

        let source_path = format!("{}/{}", self.source_dir, notebook.path);
        let raw_source = self.workspace.export(&source_path).await?;

        let output = match &bundle {
            Some(bundle) => {
                let config = self.publisher.config();
                notebook.publish_pass(&raw_source, config, self.publisher.index(), Some(&bundle.segments))
            }
            None => {
                // No bundle, nothing to splice; diagnostics already carry
                // the error
                return Ok(NotebookReport {
                    path: notebook.path.clone(),
                    published: false,
                    errors: diagnostics.errors,
                    warnings: diagnostics.warnings,
                });
            }
        };

        diagnostics.merge(output.diagnostics.clone());
        for warning in &diagnostics.warnings {
            warn!(path = %notebook.path, "{}", warning);
        }
        let warnings = match diagnostics.into_result() {
            Err(refused) => {
                warn!(path = %notebook.path, "{}", refused);
                return Ok(NotebookReport {
                    path: notebook.path.clone(),
                    published: false,
                    errors: refused.errors,
                    warnings: refused.warnings,
                });
            }
            Ok(warnings) => warnings,
        };

        write_editions(
            &self.workspace,
            notebook,
            &self.target_dir,
            &output.student_source,
            output.solutions_source.as_deref(),
        )
        .await?;

        Ok(NotebookReport {
            path: notebook.path.clone(),
            published: true,
            errors: Vec::new(),
            warnings,
        })
    }

    /// Read and sanity-check this notebook's bundle from the resource
    /// store
    fn load_bundle(
        &self,
        notebook: &NotebookDocument,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResourceBundle> {
        let file = self.resources_root.join(format!("{}.md", notebook.path));
        let content = match std::fs::read_to_string(&file) {
            Ok(content) => content,
            Err(_) => {
                diagnostics.error(format!("Resource bundle not found: {}", file.display()));
                return None;
            }
        };

        let bundle = match ResourceBundle::parse(&content) {
            Ok(bundle) => bundle,
            Err(err) => {
                diagnostics.error(format!("Malformed resource bundle {}: {}", file.display(), err));
                return None;
            }
        };

        if !self.is_excluded(&notebook.path) {
            let expected = format!("# /{}", notebook.path);
            if bundle.path_line != expected {
                diagnostics.error(format!(
                    "Resource bundle names the wrong notebook: expected \"{}\", found \"{}\"",
                    expected, bundle.path_line
                ));
                return None;
            }
        }

        Some(bundle)
    }

    fn is_excluded(&self, path: &str) -> bool {
        let top = path.split('/').next().unwrap_or(path);
        self.excluded_dirs.iter().any(|d| d == top || Path::new(d) == Path::new(path))
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
