// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic query construction for the repair hop.

use shai_core::ExecutionOutcome;

/// Build the fix query sent to the suggestion provider after a real
/// program failure.
pub fn build_fix_query(outcome: &ExecutionOutcome) -> String {
    format!(
        "Fix this error:\n\n\
         Command executed: {command}\n\
         Exit code: {exit_code}\n\
         Error output: {stderr}\n\
         Standard output: {stdout}\n\n\
         Analyze this error and provide:\n\
         1. The most likely fix command\n\
         2. A clear explanation of what went wrong\n\
         3. Alternative solutions for other possible causes",
        command = outcome.command,
        exit_code = outcome.exit_code,
        stderr = outcome.stderr.trim(),
        stdout = outcome.stdout.trim(),
    )
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
