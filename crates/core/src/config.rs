// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable per-build configuration
//!
//! One value is constructed at publish start and passed by reference into
//! the classifier and assembler. There is no ambient state: everything a
//! check needs to know about the build travels through here.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Configuration fixed for the duration of one publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Caller-supplied build version string, substituted for
    /// `{{version_number}}`
    pub version: String,
    /// Wall-clock stamp fixed at publish start, substituted for
    /// `{{built_on}}`
    pub built_on: String,
    /// Whether i18n GUID headers are required on Markdown cells
    pub i18n: bool,
    /// Target language of a localized build, when translating
    pub i18n_language: Option<String>,
    /// Warning categories suppressed for every notebook in this build
    pub ignoring: Vec<String>,
}

impl PublishConfig {
    pub fn new(version: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            built_on: published_at.format("%b %-d, %Y at %H:%M:%S UTC").to_string(),
            i18n: false,
            i18n_language: None,
            ignoring: Vec::new(),
        }
    }

    pub fn with_i18n(mut self, language: Option<String>) -> Self {
        self.i18n = true;
        self.i18n_language = language;
        self
    }

    pub fn with_ignoring(mut self, ignoring: Vec<String>) -> Self {
        self.ignoring = ignoring;
        self
    }

    /// Whether a warning category is suppressed, either globally or in the
    /// extra per-notebook set
    pub fn is_ignoring(&self, key: &str, extra: &[String]) -> bool {
        self.ignoring.iter().any(|k| k == key) || extra.iter().any(|k| k == key)
    }

    /// The replacements every notebook receives regardless of its own map
    pub fn base_replacements(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("version_number".to_string(), self.version.clone());
        map.insert("built_on".to_string(), self.built_on.clone());
        map
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
