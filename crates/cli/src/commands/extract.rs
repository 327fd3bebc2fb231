// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use cw_adapters::LocalWorkspace;
use cw_engine::{BuildConfig, Publisher};
use std::path::PathBuf;

#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the build config JSON file
    #[arg(long)]
    pub config: PathBuf,

    /// Natural language the bundles are extracted for
    #[arg(long)]
    pub language: String,

    /// Root of the per-language resource bundle store
    #[arg(long)]
    pub resources: PathBuf,
}

pub async fn extract(args: ExtractArgs, root: PathBuf) -> Result<()> {
    let build = BuildConfig::load(&args.config)?;
    let workspace = LocalWorkspace::new(root);
    let publisher = Publisher::discover(workspace, build).await?;

    let written = publisher
        .create_resource_bundles(&args.language, &args.resources)
        .await?;
    for path in &written {
        println!("extracted: {}", path);
    }
    println!("{} resource bundle(s) written", written.len());
    Ok(())
}
