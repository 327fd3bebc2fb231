// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cw_core::{Language, ObjectType, WorkspaceAdapter};

fn workspace() -> (tempfile::TempDir, LocalWorkspace) {
    let dir = tempfile::tempdir().expect("tempdir");
    let ws = LocalWorkspace::new(dir.path());
    (dir, ws)
}

#[tokio::test]
async fn import_then_export_round_trips() {
    let (_dir, ws) = workspace();
    ws.import("Labs/Intro", Language::Python, "print(1)\n", true)
        .await
        .expect("import");
    let content = ws.export("Labs/Intro").await.expect("export");
    assert_eq!(content, "print(1)\n");
}

#[tokio::test]
async fn import_respects_overwrite_flag() {
    let (_dir, ws) = workspace();
    ws.import("Agenda", Language::Python, "v1", true).await.expect("first");
    let err = ws.import("Agenda", Language::Python, "v2", false).await;
    assert!(matches!(err, Err(WorkspaceError::AlreadyExists(_))));
    ws.import("Agenda", Language::Python, "v2", true).await.expect("overwrite");
    assert_eq!(ws.export("Agenda").await.expect("export"), "v2");
}

#[tokio::test]
async fn export_missing_notebook_is_not_found() {
    let (_dir, ws) = workspace();
    let err = ws.export("Gone").await;
    assert!(matches!(err, Err(WorkspaceError::NotFound(_))));
}

#[tokio::test]
async fn get_status_distinguishes_notebooks_and_directories() {
    let (_dir, ws) = workspace();
    ws.import("Labs/Intro", Language::Sql, "SELECT 1", true)
        .await
        .expect("import");

    let notebook = ws.get_status("Labs/Intro").await.expect("status");
    let notebook = notebook.expect("present");
    assert_eq!(notebook.object_type, ObjectType::Notebook);
    assert_eq!(notebook.language, Some(Language::Sql));

    let dir = ws.get_status("Labs").await.expect("status").expect("present");
    assert_eq!(dir.object_type, ObjectType::Directory);

    assert!(ws.get_status("Missing").await.expect("status").is_none());
}

#[tokio::test]
async fn list_missing_path_is_empty_not_an_error() {
    let (_dir, ws) = workspace();
    let listing = ws.list("Nothing/Here", true).await.expect("list");
    assert!(listing.is_empty());
}

#[tokio::test]
async fn recursive_list_finds_nested_notebooks() {
    let (_dir, ws) = workspace();
    ws.import("A/One", Language::Python, "1", true).await.expect("import");
    ws.import("A/B/Two", Language::Python, "2", true).await.expect("import");
    ws.import("Top", Language::Python, "3", true).await.expect("import");

    let listing = ws.list("A", true).await.expect("list");
    let notebooks: Vec<&str> = listing
        .iter()
        .filter(|o| o.object_type == ObjectType::Notebook)
        .map(|o| o.path.as_str())
        .collect();
    assert_eq!(notebooks, vec!["A/B/Two", "A/One"]);

    let shallow = ws.list("A", false).await.expect("list");
    let shallow: Vec<&str> = shallow
        .iter()
        .filter(|o| o.object_type == ObjectType::Notebook)
        .map(|o| o.path.as_str())
        .collect();
    assert_eq!(shallow, vec!["A/One"]);
}

#[tokio::test]
async fn delete_removes_notebooks_and_trees() {
    let (_dir, ws) = workspace();
    ws.import("A/One", Language::Python, "1", true).await.expect("import");
    ws.import("A/Two", Language::Python, "2", true).await.expect("import");

    ws.delete("A/One").await.expect("delete notebook");
    assert!(ws.get_status("A/One").await.expect("status").is_none());

    ws.delete("A").await.expect("delete tree");
    assert!(ws.get_status("A").await.expect("status").is_none());
}

#[tokio::test]
async fn mkdirs_creates_nested_directories() {
    let (_dir, ws) = workspace();
    ws.mkdirs("X/Y/Z").await.expect("mkdirs");
    let status = ws.get_status("X/Y/Z").await.expect("status").expect("present");
    assert_eq!(status.object_type, ObjectType::Directory);
}
