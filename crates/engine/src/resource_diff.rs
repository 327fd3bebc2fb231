// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Segment-level diff of two resource bundle directories
//!
//! Compares the translatable segments of two versions of a course so
//! translators see exactly which cells changed, appeared, or vanished
//! between releases.

use cw_core::ResourceBundle;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// What happened to a notebook or segment between the two directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    MissingNotebook,
    MissingCell,
    CellChanged,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::MissingNotebook => write!(f, "Missing Notebook"),
            ChangeType::MissingCell => write!(f, "Missing Cell"),
            ChangeType::CellChanged => write!(f, "Cell Changed"),
        }
    }
}

/// One difference between the two resource trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub change_type: ChangeType,
    pub name: String,
    pub message: String,
}

/// Compares two resource bundle directories, typically two published
/// versions of the same course
pub struct ResourceDiff {
    dir_a: PathBuf,
    version_a: String,
    dir_b: PathBuf,
    version_b: String,
}

impl ResourceDiff {
    pub fn new(
        dir_a: impl Into<PathBuf>,
        version_a: impl Into<String>,
        dir_b: impl Into<PathBuf>,
        version_b: impl Into<String>,
    ) -> Self {
        Self {
            dir_a: dir_a.into(),
            version_a: version_a.into(),
            dir_b: dir_b.into(),
            version_b: version_b.into(),
        }
    }

    pub fn versions(&self) -> (&str, &str) {
        (&self.version_a, &self.version_b)
    }

    /// Every bundle file in either directory, with its changes.
    /// Notebooks with no differences report an empty change list.
    pub fn compare(&self) -> std::io::Result<Vec<(String, Vec<Change>)>> {
        let mut files: BTreeSet<String> = BTreeSet::new();
        collect_files(&self.dir_a, &self.dir_a, &mut files)?;
        collect_files(&self.dir_b, &self.dir_b, &mut files)?;

        let mut results = Vec::new();
        for file in files {
            let changes = diff_file(&self.dir_a, &self.dir_b, &file);
            results.push((file, changes));
        }
        Ok(results)
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeSet<String>) -> std::io::Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            files.insert(relative.to_string_lossy().into_owned());
        }
    }
    Ok(())
}

fn read_segments(root: &Path, name: &str) -> Option<ResourceBundle> {
    let content = std::fs::read_to_string(root.join(name)).ok()?;
    ResourceBundle::parse(&content).ok()
}

fn diff_file(dir_a: &Path, dir_b: &Path, name: &str) -> Vec<Change> {
    let segments_a = read_segments(dir_a, name);
    let segments_b = read_segments(dir_b, name);

    let (segments_a, segments_b) = match (segments_a, segments_b) {
        (None, _) => {
            return vec![Change {
                change_type: ChangeType::MissingNotebook,
                name: name.to_string(),
                message: format!("{} from directory A", name),
            }]
        }
        (_, None) => {
            return vec![Change {
                change_type: ChangeType::MissingNotebook,
                name: name.to_string(),
                message: format!("{} from directory B", name),
            }]
        }
        (Some(a), Some(b)) => (a.segments, b.segments),
    };

    let guids: BTreeSet<&String> = segments_a.keys().chain(segments_b.keys()).collect();

    let mut changes = Vec::new();
    for guid in guids {
        match (segments_a.get(guid), segments_b.get(guid)) {
            (None, _) => changes.push(Change {
                change_type: ChangeType::MissingCell,
                name: name.to_string(),
                message: format!("{} from directory A", guid),
            }),
            (_, None) => changes.push(Change {
                change_type: ChangeType::MissingCell,
                name: name.to_string(),
                message: format!("{} from directory B", guid),
            }),
            (Some(a), Some(b)) if a != b => changes.push(Change {
                change_type: ChangeType::CellChanged,
                name: name.to_string(),
                message: guid.to_string(),
            }),
            _ => {}
        }
    }
    changes
}

#[cfg(test)]
#[path = "resource_diff_tests.rs"]
mod tests;
