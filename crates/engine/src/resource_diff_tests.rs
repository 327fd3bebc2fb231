// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn write(root: &std::path::Path, name: &str, content: &str) {
    let file = root.join(name);
    std::fs::create_dir_all(file.parent().expect("parent")).expect("mkdirs");
    std::fs::write(file, content).expect("write");
}

#[test]
fn identical_trees_have_no_changes() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    let bundle = "# /Agenda\n<hr>--i18n-x\nSame text\n";
    write(a.path(), "Agenda.md", bundle);
    write(b.path(), "Agenda.md", bundle);

    let diff = ResourceDiff::new(a.path(), "1.0.0", b.path(), "1.1.0");
    let results = diff.compare().expect("compare");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, "Agenda.md");
    assert!(results[0].1.is_empty());
}

#[test]
fn missing_notebook_reported_per_side() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    write(a.path(), "OnlyA.md", "# /OnlyA\n<hr>--i18n-x\ntext\n");
    write(b.path(), "OnlyB.md", "# /OnlyB\n<hr>--i18n-x\ntext\n");

    let diff = ResourceDiff::new(a.path(), "1.0.0", b.path(), "1.1.0");
    let results = diff.compare().expect("compare");

    let only_a = results.iter().find(|(n, _)| n == "OnlyA.md").expect("OnlyA");
    assert_eq!(only_a.1[0].change_type, ChangeType::MissingNotebook);
    assert_eq!(only_a.1[0].message, "OnlyA.md from directory B");

    let only_b = results.iter().find(|(n, _)| n == "OnlyB.md").expect("OnlyB");
    assert_eq!(only_b.1[0].message, "OnlyB.md from directory A");
}

#[test]
fn segment_changes_and_removals_reported() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    write(
        a.path(),
        "Labs/Intro.md",
        "# /Labs/Intro\n<hr>--i18n-one\nold text\n<hr>--i18n-two\nstable\n",
    );
    write(
        b.path(),
        "Labs/Intro.md",
        "# /Labs/Intro\n<hr>--i18n-one\nnew text\n<hr>--i18n-three\nadded\n",
    );

    let diff = ResourceDiff::new(a.path(), "1.0.0", b.path(), "1.1.0");
    let results = diff.compare().expect("compare");
    let changes = &results[0].1;

    assert!(changes.contains(&Change {
        change_type: ChangeType::CellChanged,
        name: "Labs/Intro.md".to_string(),
        message: "one".to_string(),
    }));
    assert!(changes.contains(&Change {
        change_type: ChangeType::MissingCell,
        name: "Labs/Intro.md".to_string(),
        message: "three from directory A".to_string(),
    }));
    assert!(changes.contains(&Change {
        change_type: ChangeType::MissingCell,
        name: "Labs/Intro.md".to_string(),
        message: "two from directory B".to_string(),
    }));
}
