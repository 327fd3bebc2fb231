// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The workspace storage collaborator contract
//!
//! The engine reads raw notebook source and writes transformed editions
//! through this trait; directory layout, versioning, and repo lifecycle
//! belong to the implementation. "Not found" is data (`None` / empty
//! list), never an error — the only errors here are environmental.

use crate::language::Language;
use async_trait::async_trait;
use thiserror::Error;

/// What an object path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Notebook,
    Directory,
}

/// Metadata for one workspace object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub path: String,
    pub object_type: ObjectType,
    pub language: Option<Language>,
}

/// Errors from workspace storage operations
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("object already exists: {0}")]
    AlreadyExists(String),
    #[error("object is not a notebook: {0}")]
    NotANotebook(String),
    #[error("storage backend unreachable: {0}")]
    Unreachable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for the workspace storage service
#[async_trait]
pub trait WorkspaceAdapter: Clone + Send + Sync + 'static {
    /// List the objects under a path; missing paths list as empty
    async fn list(&self, path: &str, recursive: bool) -> Result<Vec<ObjectInfo>, WorkspaceError>;

    /// Metadata for one object, `None` when the path does not exist
    async fn get_status(&self, path: &str) -> Result<Option<ObjectInfo>, WorkspaceError>;

    /// Raw source text of a notebook
    async fn export(&self, path: &str) -> Result<String, WorkspaceError>;

    /// Write notebook source, creating parent directories as needed
    async fn import(
        &self,
        path: &str,
        language: Language,
        content: &str,
        overwrite: bool,
    ) -> Result<(), WorkspaceError>;

    /// Remove an object (recursively for directories)
    async fn delete(&self, path: &str) -> Result<(), WorkspaceError>;

    /// Create a directory and its ancestors
    async fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError>;
}
