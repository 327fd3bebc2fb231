// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accumulated warnings and errors for one notebook
//!
//! Per-cell checks never abort the pass; they append here so a single
//! forward pass surfaces every problem in a notebook at once. The publish
//! only fails (per notebook) after the pass completes, via
//! [`Diagnostics::into_result`].

use std::fmt;
use thiserror::Error;

/// One warning or error message tied to a notebook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The diagnostics collected across one notebook's forward pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fatal (per-notebook) error
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(Diagnostic::new(message));
    }

    /// Record a non-fatal warning
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(Diagnostic::new(message));
    }

    /// Assert-style error: returns whether the assertion held
    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> bool {
        if !ok {
            self.error(message);
        }
        ok
    }

    /// Assert-style warning: returns whether the assertion held
    pub fn check_warn(&mut self, ok: bool, message: impl Into<String>) -> bool {
        if !ok {
            self.warn(message);
        }
        ok
    }

    /// Fold another set of diagnostics into this one
    pub fn merge(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Apply the fail-at-notebook-granularity policy: warnings pass
    /// through, any error refuses the publish of this notebook.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, PublishRefused> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(PublishRefused {
                errors: self.errors,
                warnings: self.warnings,
            })
        }
    }
}

/// A notebook whose pass collected at least one error is never written
/// to the target; every collected error is reported together.
#[derive(Debug, Clone, Error)]
pub struct PublishRefused {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl fmt::Display for PublishRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = if self.errors.len() == 1 {
            "error was"
        } else {
            "errors were"
        };
        writeln!(f, "ABORTING: {} {} found while publishing", self.errors.len(), what)?;
        for error in &self.errors {
            writeln!(f, "{}", "-".repeat(80))?;
            writeln!(f, "{}", error)?;
        }
        write!(f, "Publish aborted - see previous errors for more information")
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
