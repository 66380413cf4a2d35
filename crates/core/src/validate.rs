// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pre-execution command validation.
//!
//! Runs before risk classification. Rejects input that must never reach
//! the shell: empty text and strings carrying substitution markers that
//! would let a quoted payload smuggle in a second command.

use thiserror::Error;

/// Markers that open command or parameter substitution in POSIX shells.
const INJECTION_MARKERS: [&str; 3] = ["`", "$(", "${"];

/// Why a command was rejected before execution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty command")]
    EmptyCommand,

    #[error("potential shell injection: contains {marker}")]
    InjectionMarker { marker: &'static str },
}

/// Validate raw command text.
///
/// Total over all strings: never panics, always returns a result value.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyCommand);
    }
    for marker in INJECTION_MARKERS {
        if text.contains(marker) {
            return Err(ValidationError::InjectionMarker { marker });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
