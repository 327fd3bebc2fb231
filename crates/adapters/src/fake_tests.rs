// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cw_core::Language;

#[tokio::test]
async fn clones_share_state() {
    let ws = FakeWorkspace::new();
    let clone = ws.clone();
    clone
        .import("Agenda", Language::Python, "print(1)", true)
        .await
        .expect("import");
    assert_eq!(ws.export("Agenda").await.expect("export"), "print(1)");
}

#[tokio::test]
async fn get_status_synthesizes_directories() {
    let ws = FakeWorkspace::new();
    ws.seed_notebook("Course/Labs/Intro", Language::Python, "x");

    let dir = ws.get_status("Course/Labs").await.expect("status").expect("dir");
    assert_eq!(dir.object_type, ObjectType::Directory);
    assert!(ws.get_status("Other").await.expect("status").is_none());
}

#[tokio::test]
async fn list_respects_recursion() {
    let ws = FakeWorkspace::new();
    ws.seed_notebook("C/One", Language::Python, "1");
    ws.seed_notebook("C/D/Two", Language::Python, "2");

    let all = ws.list("C", true).await.expect("list");
    assert_eq!(all.len(), 2);
    let shallow = ws.list("C", false).await.expect("list");
    assert_eq!(shallow.len(), 1);
    assert_eq!(shallow[0].path, "C/One");
}

#[tokio::test]
async fn delete_removes_subtree() {
    let ws = FakeWorkspace::new();
    ws.seed_notebook("C/One", Language::Python, "1");
    ws.seed_notebook("C/D/Two", Language::Python, "2");
    ws.delete("C").await.expect("delete");
    assert!(ws.notebook_paths().is_empty());
}

#[tokio::test]
async fn import_without_overwrite_fails_on_existing() {
    let ws = FakeWorkspace::new();
    ws.seed_notebook("A", Language::Python, "old");
    let err = ws.import("A", Language::Python, "new", false).await;
    assert!(matches!(err, Err(WorkspaceError::AlreadyExists(_))));
    assert_eq!(ws.content_at("A").expect("content"), "old");
}
