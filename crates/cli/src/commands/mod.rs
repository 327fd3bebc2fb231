// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommands

pub mod diff;
pub mod directives;
pub mod extract;
pub mod publish;
pub mod translate;

use cw_engine::PublishSummary;

/// Render the per-notebook verdicts and fail the process when any
/// notebook was refused
pub fn report_summary(summary: &PublishSummary) -> anyhow::Result<()> {
    for report in &summary.reports {
        if report.published {
            println!("published: {}", report.path);
        } else {
            println!("FAILED:    {}", report.path);
        }
        for warning in &report.warnings {
            println!("{}", "-".repeat(80));
            println!("{}", warning);
        }
        for error in &report.errors {
            println!("{}", "-".repeat(80));
            println!("{}", error);
        }
    }

    if summary.has_failures() {
        let failed = summary.failed().count();
        anyhow::bail!("{} notebook(s) failed to publish", failed);
    }
    println!("{}", "-".repeat(80));
    println!("All done!");
    Ok(())
}
