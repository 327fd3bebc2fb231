// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Build configuration loading
//!
//! One JSON file describes a course build: identity, directories, i18n
//! settings, per-notebook overrides, and the optional white/black lists.

use crate::error::PublishError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// How the publisher treats an existing target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetMode {
    /// Clear the target first, keeping repo bookkeeping files
    Delete,
    /// Write over whatever is there, leaving unused files behind
    #[default]
    Overwrite,
    /// Refuse to publish into an existing target
    NoOverwrite,
}

/// Per-notebook overrides from the `notebook_config` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotebookOverrides {
    pub include_solution: Option<bool>,
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,
    #[serde(default)]
    pub ignored_errors: Vec<String>,
}

/// The optional publish allow/deny pair. Specifying one requires the
/// other, and together they must cover every notebook.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishOnly {
    pub white_list: Vec<String>,
    pub black_list: Vec<String>,
}

/// One course build, as loaded from its JSON config file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Course name, used for default target paths
    pub name: String,
    /// Distribution version string
    pub version: String,
    /// Source tree to read notebooks from
    pub source_dir: String,
    /// Target tree; defaults to `Published/<name> - v<version>`
    #[serde(default)]
    pub target_dir: Option<String>,
    #[serde(default)]
    pub mode: TargetMode,
    #[serde(default)]
    pub i18n: bool,
    #[serde(default)]
    pub i18n_language: Option<String>,
    #[serde(default = "default_true")]
    pub include_solutions: bool,
    /// Warning categories suppressed build-wide
    #[serde(default)]
    pub ignoring: Vec<String>,
    #[serde(default)]
    pub notebook_config: BTreeMap<String, NotebookOverrides>,
    #[serde(default)]
    pub publish_only: Option<PublishOnly>,
}

fn default_true() -> bool {
    true
}

impl BuildConfig {
    /// Parse a build config from JSON text
    pub fn from_json(json: &str) -> Result<Self, PublishError> {
        let config: BuildConfig = serde_json::from_str(json)?;
        if config.name.is_empty() {
            return Err(PublishError::Config("The course's name must be specified.".into()));
        }
        if config.version.is_empty() {
            return Err(PublishError::Config("The course's version must be specified.".into()));
        }
        if config.i18n_language.is_some() && !config.i18n {
            return Err(PublishError::Config(
                "i18n_language requires i18n to be enabled".into(),
            ));
        }
        Ok(config)
    }

    /// Load a build config from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PublishError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn target_dir(&self) -> String {
        self.target_dir
            .clone()
            .unwrap_or_else(|| format!("Published/{} - v{}", self.name, self.version))
    }

    /// Overrides for one notebook path, when configured
    pub fn overrides_for(&self, path: &str) -> Option<&NotebookOverrides> {
        self.notebook_config.get(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
