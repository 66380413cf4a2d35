// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome and suggestion rendering.

use clap::ValueEnum;
use shai_core::{ExecutionOutcome, FailureKind, Suggestion};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Map an outcome to the process exit code: 0 on success, the program's
/// own exit code where there is one, 1 for everything that never ran.
pub fn exit_code(outcome: &ExecutionOutcome) -> i32 {
    if outcome.success {
        0
    } else if outcome.exit_code > 0 {
        outcome.exit_code.min(255)
    } else {
        1
    }
}

/// Print an outcome plus any local fix hints. In JSON mode the
/// suggestion that produced the command (if any) is embedded too.
pub fn print_outcome(
    outcome: &ExecutionOutcome,
    hints: &[String],
    suggestion: Option<&Suggestion>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text(outcome, hints),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "outcome": outcome,
                "fix_hints": hints,
                "suggestion": suggestion,
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}

fn print_text(outcome: &ExecutionOutcome, hints: &[String]) {
    if !outcome.stdout.is_empty() {
        print!("{}", outcome.stdout);
        if !outcome.stdout.ends_with('\n') {
            println!();
        }
    }
    if !outcome.stderr.is_empty() {
        eprint!("{}", outcome.stderr);
        if !outcome.stderr.ends_with('\n') {
            eprintln!();
        }
    }
    if outcome.failure == Some(FailureKind::NonZeroExit) {
        eprintln!("command failed with exit code {}", outcome.exit_code);
    }
    if !hints.is_empty() {
        eprintln!();
        eprintln!("Possible fixes:");
        for hint in hints {
            eprintln!("  - {hint}");
        }
    }
}

/// Show a suggestion before it is run (text mode only; JSON mode embeds
/// it in the final outcome object).
pub fn print_suggestion(suggestion: &Suggestion) {
    eprintln!("Suggested command: {}", suggestion.command);
    if !suggestion.explanation.is_empty() {
        eprintln!("  {}", suggestion.explanation);
    }
    for risk in &suggestion.risks {
        eprintln!("  risk: {risk}");
    }
    for alternative in &suggestion.alternatives {
        eprintln!("  alternative: {alternative}");
    }
}
