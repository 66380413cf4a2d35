// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal confirmation prompt for dangerous commands.

use std::io::Write;

use async_trait::async_trait;
use shai_adapters::ConfirmationCapability;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prompts on stderr and reads one line from stdin. Anything other than
/// an explicit yes denies, as do EOF and Ctrl-C.
pub struct TerminalConfirmer;

#[async_trait]
impl ConfirmationCapability for TerminalConfirmer {
    async fn ask(&self, command: &str, risks: &[String]) -> bool {
        eprintln!();
        eprintln!("WARNING: this command may be dangerous");
        eprintln!("  command: {command}");
        for risk in risks {
            eprintln!("  - {risk}");
        }
        eprint!("Execute anyway? [y/N]: ");
        let _ = std::io::stderr().flush();

        let answer = tokio::select! {
            line = read_line() => line.unwrap_or_default(),
            _ = tokio::signal::ctrl_c() => String::new(),
        };
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

async fn read_line() -> Option<String> {
    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());
    match stdin.read_line(&mut line).await {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
