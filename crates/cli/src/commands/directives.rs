// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cw_core::{Directive, SUPPORTED_DIRECTIVES};

fn describe(directive: Directive) -> &'static str {
    match directive {
        Directive::SourceOnly => {
            "Indicates that this cell is used in the source notebook only and is not to be included in the published version."
        }
        Directive::Todo => {
            "Indicates that this cell is an exercise for students - the entire cell is expected to be commented out."
        }
        Directive::Answer => {
            "Indicates that this cell is the solution to a preceding TODO cell. The build will fail if the total number of ANSWER cells is less than the total number of TODO cells."
        }
        Directive::Dummy => {
            "A directive that replaces itself with a nice little message for you - used in unit tests for the build engine."
        }
        Directive::IncludeHeaderTrue => {
            "Indicates that this notebook should include the default header - to be included in the first cell of the notebook."
        }
        Directive::IncludeHeaderFalse => {
            "Indicates that this notebook should NOT include the default header - to be included in the first cell of the notebook."
        }
        Directive::IncludeFooterTrue => {
            "Indicates that this notebook should include the default footer - to be included in the last cell of the notebook."
        }
        Directive::IncludeFooterFalse => {
            "Indicates that this notebook should NOT include the default footer - to be included in the last cell of the notebook."
        }
    }
}

/// Print the supported-directive reference the unsupported-directive
/// warning points authors at
pub fn directives() {
    println!("Supported directives");
    println!("{}", "=".repeat(80));
    for directive in SUPPORTED_DIRECTIVES {
        println!("{}", directive);
        println!("    {}", describe(directive));
    }
}
