// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the publish orchestration

use cw_core::{UnsupportedLanguage, WorkspaceError};
use thiserror::Error;

/// Errors that abort an entire publish run. Per-notebook structural
/// problems are not represented here; they travel in each notebook's
/// report so one bad notebook cannot hide another's diagnostics.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Language(#[from] UnsupportedLanguage),
    #[error("The required notebook \"{0}\" was not found.")]
    MissingVersionInfo(String),
    #[error("The target path already exists and the build is configured for no-overwrite: {0}")]
    TargetExists(String),
    #[error("invalid white/black list: {0}")]
    ListConfig(String),
    #[error("invalid build config: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("publish task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
