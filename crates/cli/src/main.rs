// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cw - Courseware build & publish CLI

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{diff, directives, extract, publish, translate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cw",
    version,
    about = "Courseware notebook build and publish pipeline"
)]
struct Cli {
    /// Workspace root directory holding the source tree
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the student and solutions editions
    Publish(publish::PublishArgs),
    /// Publish a localized edition from resource bundles
    Translate(translate::TranslateArgs),
    /// Extract translatable resource bundles
    Extract(extract::ExtractArgs),
    /// Compare two resource bundle directories
    DiffResources(diff::DiffArgs),
    /// Print the supported directive reference
    Directives,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Publish(args) => publish::publish(args, cli.root).await,
        Commands::Translate(args) => translate::translate(args, cli.root).await,
        Commands::Extract(args) => extract::extract(args, cli.root).await,
        Commands::DiffResources(args) => diff::diff_resources(args),
        Commands::Directives => {
            directives::directives();
            Ok(())
        }
    }
}
