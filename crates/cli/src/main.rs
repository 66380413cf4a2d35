// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `shai` - guarded shell execution with AI-assisted repair.
//!
//! The binary stays thin: argument parsing, config loading, wiring the
//! terminal confirmer and the configured suggestion provider into an
//! [`Executor`], and rendering outcomes. All policy lives in the library
//! crates.

mod commands;
mod confirm;
mod exit_error;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shai_adapters::Provider;
use shai_core::Config;
use shai_engine::Executor;
use tracing_subscriber::EnvFilter;

use crate::confirm::TerminalConfirmer;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shai", version, about = "Guarded AI shell assistant")]
struct Cli {
    /// Config file path (default: ~/.config/shai/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a shell command through the guarded pipeline
    Run {
        /// Command text (quote it, or pass it as trailing words)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,

        #[command(flatten)]
        flags: ExecFlags,
    },
    /// Describe a task; get a suggested command and run it guarded
    Ask {
        /// Natural-language request
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,

        #[command(flatten)]
        flags: ExecFlags,
    },
}

#[derive(Args, Clone, Copy)]
struct ExecFlags {
    /// Approve dangerous commands without prompting
    #[arg(short = 'y', long)]
    yes: bool,

    /// Preview the pipeline without spawning a process
    #[arg(long)]
    dry_run: bool,

    /// On failure, skip the AI repair hop
    #[arg(long)]
    no_repair: bool,

    /// Execution timeout in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli).await {
        match err.downcast::<ExitError>() {
            Ok(exit) => std::process::exit(exit.code),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { command, flags } => {
            let executor = build_executor(cli.config.as_deref(), &flags)?;
            commands::run(&executor, &command.join(" "), flags).await
        }
        Commands::Ask { query, flags } => {
            let executor = build_executor(cli.config.as_deref(), &flags)?;
            commands::ask(&executor, &query.join(" "), flags).await
        }
    }
}

fn build_executor(
    config_path: Option<&Path>,
    flags: &ExecFlags,
) -> Result<Executor<Provider, TerminalConfirmer>> {
    let config = resolve_config(config_path, flags)?;
    let provider = Provider::from_config(&config.provider)
        .context("failed to construct suggestion provider")?;
    Executor::from_config(&config, provider, TerminalConfirmer)
        .context("invalid dangerous-pattern rules in config")
}

/// Defaults, then the config file, then the environment, then
/// per-invocation flags.
fn resolve_config(config_path: Option<&Path>, flags: &ExecFlags) -> Result<Config> {
    let mut config = load_config(config_path)?;
    config.apply_env();
    if let Some(secs) = flags.timeout {
        config.safety.timeout_secs = secs;
    }
    tracing::debug!(
        provider = ?config.provider.kind,
        timeout_secs = config.safety.timeout_secs,
        "configuration resolved"
    );
    Ok(config)
}

/// Load the config file. An explicitly passed path must exist; the
/// default path is optional and falls back to built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => match default_config_path() {
            Some(path) if path.exists() => Config::from_file(&path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            _ => Ok(Config::default()),
        },
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shai").join("config.toml"))
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
