// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed workspace storage
//!
//! Notebooks live as plain source files under a root directory; the
//! workspace path is the file path without its language extension, so
//! `Labs/Intro` in a Python tree is `<root>/Labs/Intro.py` on disk.

use async_trait::async_trait;
use cw_core::{Language, ObjectInfo, ObjectType, WorkspaceAdapter, WorkspaceError};
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSIONS: [(&str, Language); 4] = [
    ("py", Language::Python),
    ("sql", Language::Sql),
    ("scala", Language::Scala),
    ("r", Language::R),
];

/// Workspace adapter over a local directory tree
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn absolute(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    /// Resolve a workspace path to the notebook file behind it, if any
    fn notebook_file(&self, path: &str) -> Option<(PathBuf, Language)> {
        let base = self.absolute(path);
        EXTENSIONS.iter().find_map(|(ext, language)| {
            let candidate = base.with_extension(ext);
            candidate.is_file().then_some((candidate, *language))
        })
    }

    fn relative_path(&self, file: &Path) -> String {
        file.strip_prefix(&self.root)
            .unwrap_or(file)
            .with_extension("")
            .to_string_lossy()
            .into_owned()
    }

    fn info_for_file(&self, file: &Path) -> Option<ObjectInfo> {
        let ext = file.extension()?.to_str()?;
        let language = EXTENSIONS
            .iter()
            .find_map(|(e, l)| (*e == ext).then_some(*l))?;
        Some(ObjectInfo {
            path: self.relative_path(file),
            object_type: ObjectType::Notebook,
            language: Some(language),
        })
    }

    fn collect(
        &self,
        dir: &Path,
        recursive: bool,
        results: &mut Vec<ObjectInfo>,
    ) -> Result<(), WorkspaceError> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                results.push(ObjectInfo {
                    path: self.relative_path(&path),
                    object_type: ObjectType::Directory,
                    language: None,
                });
                if recursive {
                    self.collect(&path, true, results)?;
                }
            } else if let Some(info) = self.info_for_file(&path) {
                results.push(info);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl WorkspaceAdapter for LocalWorkspace {
    async fn list(&self, path: &str, recursive: bool) -> Result<Vec<ObjectInfo>, WorkspaceError> {
        let dir = self.absolute(path);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut results = Vec::new();
        self.collect(&dir, recursive, &mut results)?;
        results.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(results)
    }

    async fn get_status(&self, path: &str) -> Result<Option<ObjectInfo>, WorkspaceError> {
        if self.absolute(path).is_dir() {
            return Ok(Some(ObjectInfo {
                path: path.to_string(),
                object_type: ObjectType::Directory,
                language: None,
            }));
        }
        Ok(self.notebook_file(path).map(|(_, language)| ObjectInfo {
            path: path.to_string(),
            object_type: ObjectType::Notebook,
            language: Some(language),
        }))
    }

    async fn export(&self, path: &str) -> Result<String, WorkspaceError> {
        let (file, _) = self
            .notebook_file(path)
            .ok_or_else(|| WorkspaceError::NotFound(path.to_string()))?;
        Ok(tokio::fs::read_to_string(file).await?)
    }

    async fn import(
        &self,
        path: &str,
        language: Language,
        content: &str,
        overwrite: bool,
    ) -> Result<(), WorkspaceError> {
        let extension = EXTENSIONS
            .iter()
            .find_map(|(e, l)| (*l == language).then_some(*e))
            .unwrap_or("py");
        let file = self.absolute(path).with_extension(extension);

        if !overwrite && file.exists() {
            return Err(WorkspaceError::AlreadyExists(path.to_string()));
        }
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        debug!(path, ?file, "importing notebook");
        tokio::fs::write(file, content).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), WorkspaceError> {
        let target = self.absolute(path);
        if target.is_dir() {
            tokio::fs::remove_dir_all(target).await?;
        } else if let Some((file, _)) = self.notebook_file(path) {
            tokio::fs::remove_file(file).await?;
        }
        Ok(())
    }

    async fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError> {
        tokio::fs::create_dir_all(self.absolute(path)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
