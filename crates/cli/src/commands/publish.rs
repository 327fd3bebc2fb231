// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::report_summary;
use anyhow::Result;
use clap::Args;
use cw_adapters::LocalWorkspace;
use cw_engine::{BuildConfig, Publisher};
use std::path::PathBuf;

#[derive(Args)]
pub struct PublishArgs {
    /// Path to the build config JSON file
    #[arg(long)]
    pub config: PathBuf,
}

pub async fn publish(args: PublishArgs, root: PathBuf) -> Result<()> {
    let build = BuildConfig::load(&args.config)?;
    println!("Source: {}", build.source_dir);
    println!("Target: {}", build.target_dir());

    let workspace = LocalWorkspace::new(root);
    let publisher = Publisher::discover(workspace, build).await?;
    println!("Notebooks: {}", publisher.notebooks().len());

    let summary = publisher.publish().await?;
    report_summary(&summary)
}
