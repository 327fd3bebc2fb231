// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory workspace fake for tests

use async_trait::async_trait;
use cw_core::{Language, ObjectInfo, ObjectType, WorkspaceAdapter, WorkspaceError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct FakeObject {
    object_type: ObjectType,
    language: Option<Language>,
    content: String,
}

/// A workspace held entirely in memory, shared across clones
#[derive(Debug, Clone, Default)]
pub struct FakeWorkspace {
    objects: Arc<Mutex<BTreeMap<String, FakeObject>>>,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a notebook into the fake tree
    pub fn seed_notebook(&self, path: &str, language: Language, content: &str) {
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects.insert(
            path.to_string(),
            FakeObject {
                object_type: ObjectType::Notebook,
                language: Some(language),
                content: content.to_string(),
            },
        );
    }

    /// The content previously imported at a path, if any
    pub fn content_at(&self, path: &str) -> Option<String> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects.get(path).map(|o| o.content.clone())
    }

    /// Every notebook path currently stored
    pub fn notebook_paths(&self) -> Vec<String> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects
            .iter()
            .filter(|(_, o)| o.object_type == ObjectType::Notebook)
            .map(|(p, _)| p.clone())
            .collect()
    }
}

#[async_trait]
impl WorkspaceAdapter for FakeWorkspace {
    async fn list(&self, path: &str, recursive: bool) -> Result<Vec<ObjectInfo>, WorkspaceError> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut results = Vec::new();
        for (object_path, object) in objects.iter() {
            if !object_path.starts_with(&prefix) {
                continue;
            }
            let remainder = &object_path[prefix.len()..];
            if !recursive && remainder.contains('/') {
                continue;
            }
            results.push(ObjectInfo {
                path: object_path.clone(),
                object_type: object.object_type,
                language: object.language,
            });
        }
        Ok(results)
    }

    async fn get_status(&self, path: &str) -> Result<Option<ObjectInfo>, WorkspaceError> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(object) = objects.get(path) {
            return Ok(Some(ObjectInfo {
                path: path.to_string(),
                object_type: object.object_type,
                language: object.language,
            }));
        }
        // An object below the path makes it an implicit directory
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let is_dir = objects.keys().any(|p| p.starts_with(&prefix));
        Ok(is_dir.then(|| ObjectInfo {
            path: path.to_string(),
            object_type: ObjectType::Directory,
            language: None,
        }))
    }

    async fn export(&self, path: &str) -> Result<String, WorkspaceError> {
        let objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects
            .get(path)
            .map(|o| o.content.clone())
            .ok_or_else(|| WorkspaceError::NotFound(path.to_string()))
    }

    async fn import(
        &self,
        path: &str,
        language: Language,
        content: &str,
        overwrite: bool,
    ) -> Result<(), WorkspaceError> {
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        if !overwrite && objects.contains_key(path) {
            return Err(WorkspaceError::AlreadyExists(path.to_string()));
        }
        objects.insert(
            path.to_string(),
            FakeObject {
                object_type: ObjectType::Notebook,
                language: Some(language),
                content: content.to_string(),
            },
        );
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), WorkspaceError> {
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        let prefix = format!("{}/", path.trim_end_matches('/'));
        objects.retain(|p, _| p != path && !p.starts_with(&prefix));
        Ok(())
    }

    async fn mkdirs(&self, path: &str) -> Result<(), WorkspaceError> {
        let mut objects = self.objects.lock().unwrap_or_else(|e| e.into_inner());
        objects.entry(path.to_string()).or_insert(FakeObject {
            object_type: ObjectType::Directory,
            language: None,
            content: String::new(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
