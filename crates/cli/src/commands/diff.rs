// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use cw_engine::ResourceDiff;
use std::path::PathBuf;

#[derive(Args)]
pub struct DiffArgs {
    /// First resource directory
    pub dir_a: PathBuf,
    /// Version label for the first directory
    #[arg(long, default_value = "A")]
    pub version_a: String,
    /// Second resource directory
    pub dir_b: PathBuf,
    /// Version label for the second directory
    #[arg(long, default_value = "B")]
    pub version_b: String,
}

pub fn diff_resources(args: DiffArgs) -> Result<()> {
    let diff = ResourceDiff::new(&args.dir_a, &args.version_a, &args.dir_b, &args.version_b);
    println!("Dir A ({}): {}", args.version_a, args.dir_a.display());
    println!("Dir B ({}): {}", args.version_b, args.dir_b.display());

    let mut total = 0usize;
    for (name, changes) in diff.compare()? {
        println!("{}", "-".repeat(80));
        println!("/{}", name);
        if changes.is_empty() {
            println!("  unchanged");
        }
        for change in changes {
            total += 1;
            println!("  {}: {}", change.change_type, change.message);
        }
    }
    println!("{}", "-".repeat(80));
    println!("{} change(s) found", total);
    Ok(())
}
