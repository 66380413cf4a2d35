// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `shai run` and `shai ask` command implementations.

use anyhow::Result;
use shai_adapters::{ConfirmationCapability, SuggestionProvider};
use shai_core::{suggest_fixes, ExecutionOutcome, Suggestion};
use shai_engine::{ExecOptions, Executor};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};
use crate::ExecFlags;

/// Execute a command the user typed through the guarded pipeline.
pub async fn run<P, C>(executor: &Executor<P, C>, text: &str, flags: ExecFlags) -> Result<()>
where
    P: SuggestionProvider,
    C: ConfirmationCapability,
{
    let outcome = attempt(executor, text, flags).await;
    finish(&outcome, None, flags.output)
}

/// Turn a natural-language request into a command, show it, and run it
/// through the same pipeline. The suggestion is untrusted input: it gets
/// its own verdict and gate like anything typed by hand.
pub async fn ask<P, C>(executor: &Executor<P, C>, query: &str, flags: ExecFlags) -> Result<()>
where
    P: SuggestionProvider,
    C: ConfirmationCapability,
{
    let suggestion = executor.suggest(query).await;
    if flags.output == OutputFormat::Text {
        output::print_suggestion(&suggestion);
    }

    let outcome = attempt(executor, suggestion.command.as_str(), flags).await;
    finish(&outcome, Some(&suggestion), flags.output)
}

async fn attempt<P, C>(
    executor: &Executor<P, C>,
    text: &str,
    flags: ExecFlags,
) -> ExecutionOutcome
where
    P: SuggestionProvider,
    C: ConfirmationCapability,
{
    if flags.dry_run || flags.no_repair {
        let opts = ExecOptions { dry_run: flags.dry_run, auto_confirm: flags.yes };
        executor.execute(text, opts).await
    } else {
        executor.attempt_with_repair(text, flags.yes).await
    }
}

fn finish(
    outcome: &ExecutionOutcome,
    suggestion: Option<&Suggestion>,
    format: OutputFormat,
) -> Result<()> {
    // Local hints only make sense for commands that actually ran and failed.
    let hints = if outcome.is_repair_candidate() { suggest_fixes(outcome) } else { Vec::new() };
    output::print_outcome(outcome, &hints, suggestion, format)?;

    let code = output::exit_code(outcome);
    if code != 0 {
        return Err(ExitError::new(code).into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
