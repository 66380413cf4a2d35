// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic remediation hints for failed executions.
//!
//! Categories are checked in priority order and are mutually exclusive:
//! the first matching category produces all the hints, so suggestions stay
//! focused rather than exhaustive. An empty result is a normal outcome.

use crate::outcome::ExecutionOutcome;
use regex::Regex;
use std::sync::OnceLock;

const PACKAGE_MANAGERS: [&str; 4] = ["apt", "yum", "dnf", "brew"];

/// Advisory fix hints derived from the captured stderr and command shape.
pub fn suggest_fixes(outcome: &ExecutionOutcome) -> Vec<String> {
    let stderr = outcome.stderr.to_lowercase();
    let command = outcome.command.as_str();
    let program = outcome.command.first_token().unwrap_or("the command");

    if stderr.contains("command not found") {
        return vec![
            format!("Install {program} using your package manager"),
            format!("Check if {program} is in your PATH"),
            "Check for typos in the command name".to_string(),
        ];
    }

    if stderr.contains("permission denied") {
        return vec![
            format!("Try with elevated privileges: sudo {command}"),
            "Check file permissions with ls -l".to_string(),
            "Ensure you have access to the file or directory".to_string(),
        ];
    }

    if stderr.contains("no such file or directory") {
        return vec![
            "Check if the file or directory exists".to_string(),
            "Verify the path is correct".to_string(),
        ];
    }

    if PACKAGE_MANAGERS.iter().any(|pkg| stderr.contains(pkg)) {
        if stderr.contains("lock") {
            return vec![
                "Another package manager process is running".to_string(),
                "Wait for it to finish or remove the stale lock".to_string(),
            ];
        }
        if stderr.contains("not found") {
            return vec![
                "Update the package index first".to_string(),
                "Check the package name spelling".to_string(),
            ];
        }
        return Vec::new();
    }

    if outcome.command.first_token() == Some("git") {
        if stderr.contains("not a git repository") {
            return vec![
                "Initialize a repository first: git init".to_string(),
                "Or clone an existing repository".to_string(),
            ];
        }
        if stderr.contains("merge conflict") {
            return vec![
                "Resolve the conflicts manually, then stage the files".to_string(),
                "Use git status to see conflicted files".to_string(),
            ];
        }
        return Vec::new();
    }

    if command.contains("python") || command.contains("pip") {
        if stderr.contains("modulenotfounderror") {
            if let Some(module) = missing_module(&outcome.stderr) {
                return vec![format!("Install the missing module: pip install {module}")];
            }
            return Vec::new();
        }
        if stderr.contains("syntaxerror") {
            return vec![
                "Check the script for syntax errors".to_string(),
                "Verify the Python version matches the script".to_string(),
            ];
        }
    }

    Vec::new()
}

/// Extract the module name from a `ModuleNotFoundError` message.
fn missing_module(stderr: &str) -> Option<String> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"No module named '([^']+)'").ok())
        .as_ref()
        .and_then(|re| re.captures(stderr))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "fixes_tests.rs"]
mod tests;
