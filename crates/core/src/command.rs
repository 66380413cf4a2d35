// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of execution: opaque shell-interpretable text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A shell command as raw text.
///
/// The engine never tokenizes or parses this beyond whitespace splitting
/// for [`Command::first_token`]; the text is handed verbatim to the shell
/// interpreter at the execution boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The program name, i.e. the first whitespace-delimited token.
    pub fn first_token(&self) -> Option<&str> {
        self.0.split_whitespace().next()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
