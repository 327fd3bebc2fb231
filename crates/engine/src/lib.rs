// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-engine: build orchestration over the cw-core transformation engine
//!
//! Thin glue around the per-notebook forward pass: build configuration,
//! the publisher (student/solutions editions), the translator (localized
//! editions), and the resource-bundle diff.

pub mod config;
pub mod error;
pub mod publisher;
pub mod resource_diff;
pub mod translator;

pub use config::{BuildConfig, NotebookOverrides, PublishOnly, TargetMode};
pub use error::PublishError;
pub use publisher::{NotebookReport, PublishSummary, Publisher, VERSION_INFO_NOTEBOOK};
pub use resource_diff::{Change, ChangeType, ResourceDiff};
pub use translator::Translator;
