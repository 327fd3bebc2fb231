// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The publisher: one build config in, published editions out
//!
//! Notebooks are independent of each other, so the forward passes fan out
//! across tasks; the only serialization point is the final write through
//! the workspace adapter, which has overwrite semantics. A notebook with
//! errors is reported but never written; environmental failures abort the
//! whole run.

use crate::config::{BuildConfig, PublishOnly, TargetMode};
use crate::error::PublishError;
use chrono::Utc;
use cw_core::{
    Diagnostic, NotebookDocument, NotebookIndex, ObjectType, PublishConfig, WorkspaceAdapter,
};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

/// The notebook every published course must carry
pub const VERSION_INFO_NOTEBOOK: &str = "Version Info";

/// Repo bookkeeping files spared by delete mode
const KEEPERS: [&str; 4] = [".gitignore", "README.md", "LICENSE", "docs"];

/// The per-notebook verdict handed to the build orchestration
#[derive(Debug, Clone)]
pub struct NotebookReport {
    pub path: String,
    /// False when errors kept this notebook from being written
    pub published: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Every notebook's verdict for one publish run
#[derive(Debug, Clone)]
pub struct PublishSummary {
    /// Identifies this run in logs and notifications
    pub build_id: String,
    pub reports: Vec<NotebookReport>,
}

impl PublishSummary {
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| !r.published)
    }

    pub fn failed(&self) -> impl Iterator<Item = &NotebookReport> {
        self.reports.iter().filter(|r| !r.published)
    }
}

/// Publishes the student and solutions editions of one course
pub struct Publisher<W: WorkspaceAdapter> {
    workspace: W,
    build: BuildConfig,
    config: Arc<PublishConfig>,
    index: Arc<NotebookIndex>,
    notebooks: Vec<NotebookDocument>,
    build_id: String,
}

impl<W: WorkspaceAdapter> Publisher<W> {
    /// Discover the source tree and validate the build configuration
    pub async fn discover(workspace: W, build: BuildConfig) -> Result<Self, PublishError> {
        let source_prefix = format!("{}/", build.source_dir.trim_end_matches('/'));
        let objects = workspace.list(&build.source_dir, true).await?;

        let mut notebooks = Vec::new();
        for object in objects {
            if object.object_type != ObjectType::Notebook {
                continue;
            }
            let relative = object
                .path
                .strip_prefix(&source_prefix)
                .unwrap_or(&object.path)
                .to_string();
            let language = match object.language {
                Some(language) => language,
                None => continue,
            };

            let mut notebook = NotebookDocument::new(relative.clone(), language);
            notebook.include_solution = build.include_solutions;
            if let Some(overrides) = build.overrides_for(&relative) {
                if let Some(include_solution) = overrides.include_solution {
                    notebook.include_solution = include_solution;
                }
                notebook.replacements.extend(overrides.replacements.clone());
                notebook.ignoring = overrides.ignored_errors.clone();
            }
            notebooks.push(notebook);
        }
        notebooks.sort_by(|a, b| a.path.cmp(&b.path));

        let paths: Vec<String> = notebooks.iter().map(|n| n.path.clone()).collect();
        validate_publish_only(&build.publish_only, &paths)?;

        let mut config = PublishConfig::new(build.version.clone(), Utc::now())
            .with_ignoring(build.ignoring.clone());
        if build.i18n {
            config = config.with_i18n(build.i18n_language.clone());
        }

        let index = NotebookIndex::new(&paths);

        Ok(Self {
            workspace,
            build,
            config: Arc::new(config),
            index: Arc::new(index),
            notebooks,
            build_id: Uuid::new_v4().to_string(),
        })
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    pub fn notebooks(&self) -> &[NotebookDocument] {
        &self.notebooks
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    pub fn index(&self) -> &NotebookIndex {
        &self.index
    }

    /// The notebooks a publish actually writes (black list removed)
    pub fn main_notebooks(&self) -> Vec<NotebookDocument> {
        let black_list = self
            .build
            .publish_only
            .as_ref()
            .map(|p| p.black_list.clone())
            .unwrap_or_default();
        self.notebooks
            .iter()
            .filter(|n| !black_list.contains(&n.path))
            .cloned()
            .collect()
    }

    /// Publish every notebook, one task per notebook
    pub async fn publish(&self) -> Result<PublishSummary, PublishError> {
        let main_notebooks = self.main_notebooks();

        if !main_notebooks.iter().any(|n| n.path == VERSION_INFO_NOTEBOOK) {
            return Err(PublishError::MissingVersionInfo(VERSION_INFO_NOTEBOOK.into()));
        }

        let target_dir = self.build.target_dir();
        self.prepare_target(&target_dir).await?;

        info!(
            build_id = %self.build_id,
            source = %self.build.source_dir,
            target = %target_dir,
            notebooks = main_notebooks.len(),
            "publishing course"
        );

        let mut join_set: JoinSet<Result<NotebookReport, PublishError>> = JoinSet::new();
        for notebook in main_notebooks {
            let workspace = self.workspace.clone();
            let config = Arc::clone(&self.config);
            let index = Arc::clone(&self.index);
            let source_dir = self.build.source_dir.clone();
            let target_dir = target_dir.clone();
            join_set.spawn(async move {
                publish_notebook(workspace, config, index, notebook, source_dir, target_dir).await
            });
        }

        let mut reports = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            reports.push(joined??);
        }
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(PublishSummary {
            build_id: self.build_id.clone(),
            reports,
        })
    }

    /// Extract per-notebook resource bundles for translators into a
    /// local flat-file directory, one `<path>.md` per notebook.
    pub async fn create_resource_bundles(
        &self,
        natural_language: &str,
        resources_root: &Path,
    ) -> Result<Vec<String>, PublishError> {
        let language_root = resources_root.join(natural_language);
        let mut written = Vec::new();

        for notebook in &self.notebooks {
            let source_path = format!("{}/{}", self.build.source_dir, notebook.path);
            let raw_source = self.workspace.export(&source_path).await?;

            let Some((bundle, diagnostics)) = notebook.extract_resources(&raw_source, &self.config)
            else {
                continue;
            };
            for error in &diagnostics.errors {
                warn!(path = %notebook.path, "{}", error);
            }

            let file = language_root.join(format!("{}.md", notebook.path));
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&file, bundle)?;
            written.push(notebook.path.clone());
        }

        Ok(written)
    }

    async fn prepare_target(&self, target_dir: &str) -> Result<(), PublishError> {
        match self.build.mode {
            TargetMode::Overwrite => Ok(()),
            TargetMode::NoOverwrite => {
                if self.workspace.get_status(target_dir).await?.is_some() {
                    return Err(PublishError::TargetExists(target_dir.to_string()));
                }
                Ok(())
            }
            TargetMode::Delete => {
                let keepers: Vec<String> =
                    KEEPERS.iter().map(|k| format!("{}/{}", target_dir, k)).collect();
                for object in self.workspace.list(target_dir, false).await? {
                    if keepers.contains(&object.path) {
                        continue;
                    }
                    info!(path = %object.path, "deleting from target");
                    self.workspace.delete(&object.path).await?;
                }
                Ok(())
            }
        }
    }
}

/// One notebook's full read-transform-write cycle
async fn publish_notebook<W: WorkspaceAdapter>(
    workspace: W,
    config: Arc<PublishConfig>,
    index: Arc<NotebookIndex>,
    notebook: NotebookDocument,
    source_dir: String,
    target_dir: String,
) -> Result<NotebookReport, PublishError> {
    let source_path = format!("{}/{}", source_dir, notebook.path);
    let raw_source = workspace.export(&source_path).await?;

    let output = notebook.publish_pass(&raw_source, &config, &index, None);
    for warning in &output.diagnostics.warnings {
        warn!(path = %notebook.path, "{}", warning);
    }

    let warnings = match output.diagnostics.clone().into_result() {
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
        &workspace,
        &notebook,
        &target_dir,
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

/// Write the student edition, and the solutions edition when enabled
pub(crate) async fn write_editions<W: WorkspaceAdapter>(
    workspace: &W,
    notebook: &NotebookDocument,
    target_dir: &str,
    student_source: &str,
    solutions_source: Option<&str>,
) -> Result<(), PublishError> {
    let student_path = format!("{}/{}", target_dir, notebook.path);
    mkdirs_for(workspace, &student_path).await?;
    workspace
        .import(&student_path, notebook.language, student_source, true)
        .await?;
    info!(path = %student_path, "published student edition");

    if let Some(solutions_source) = solutions_source {
        let solutions_path = format!("{}/Solutions/{}", target_dir, notebook.path);
        mkdirs_for(workspace, &solutions_path).await?;
        workspace
            .import(&solutions_path, notebook.language, solutions_source, true)
            .await?;
        info!(path = %solutions_path, "published solutions edition");
    }
    Ok(())
}

async fn mkdirs_for<W: WorkspaceAdapter>(workspace: &W, path: &str) -> Result<(), PublishError> {
    if let Some((parent, _)) = path.rsplit_once('/') {
        workspace.mkdirs(parent).await?;
    }
    Ok(())
}

/// Port of the white/black list rules: both or neither, disjoint, every
/// entry a real notebook, and together exhaustive.
fn validate_publish_only(
    publish_only: &Option<PublishOnly>,
    notebook_paths: &[String],
) -> Result<(), PublishError> {
    let Some(lists) = publish_only else {
        return Ok(());
    };

    for path in &lists.white_list {
        if lists.black_list.contains(path) {
            return Err(PublishError::ListConfig(format!(
                "The white-list path \"{}\" was also found in the black-list.",
                path
            )));
        }
        if !notebook_paths.contains(path) {
            return Err(PublishError::ListConfig(format!(
                "The white-list path \"{}\" does not exist in the complete set of notebooks.",
                path
            )));
        }
    }
    for path in &lists.black_list {
        if !notebook_paths.contains(path) {
            return Err(PublishError::ListConfig(format!(
                "The black-list path \"{}\" does not exist in the complete set of notebooks.",
                path
            )));
        }
    }
    for path in notebook_paths {
        if !lists.white_list.contains(path) && !lists.black_list.contains(path) {
            return Err(PublishError::ListConfig(format!(
                "The notebook \"{}\" was not found in either the white-list or black-list.",
                path
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
