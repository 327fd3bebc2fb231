// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::report_summary;
use anyhow::Result;
use clap::Args;
use cw_adapters::LocalWorkspace;
use cw_engine::{BuildConfig, Translator};
use std::path::PathBuf;

#[derive(Args)]
pub struct TranslateArgs {
    /// Path to the build config JSON file
    #[arg(long)]
    pub config: PathBuf,

    /// Root of the per-language resource bundle store
    #[arg(long)]
    pub resources: PathBuf,

    /// Top-level directories exempt from the bundle path check
    #[arg(long = "exclude")]
    pub excluded: Vec<String>,
}

pub async fn translate(args: TranslateArgs, root: PathBuf) -> Result<()> {
    let build = BuildConfig::load(&args.config)?;
    println!("Source: {}", build.source_dir);
    println!("Target: {}", build.target_dir());

    let workspace = LocalWorkspace::new(root);
    let translator = Translator::discover(workspace, build, args.resources)
        .await?
        .with_excluded_dirs(args.excluded);
    println!("Language: {}", translator.language());

    let summary = translator.translate().await?;
    report_summary(&summary)
}
