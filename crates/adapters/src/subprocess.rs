// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded subprocess execution with full output capture.

use std::process::Output;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubprocessError {
    /// The deadline elapsed; the child was force-killed.
    #[error("{label} timed out after {secs} seconds")]
    Timeout { label: String, secs: u64 },

    /// The process could not be spawned or waited on.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Run a command under a wall-clock bound, capturing stdout/stderr.
///
/// The child is spawned with kill-on-drop, so when the deadline elapses
/// and the wait future is dropped the process is forcibly terminated
/// rather than left running.
pub async fn run_with_timeout(
    mut cmd: tokio::process::Command,
    limit: Duration,
    label: &str,
) -> Result<Output, SubprocessError> {
    cmd.kill_on_drop(true);
    let child = cmd.spawn()?;
    match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(SubprocessError::Timeout {
            label: label.to_string(),
            // Round sub-second limits up so the error never says zero.
            secs: limit.as_secs().max(1),
        }),
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
