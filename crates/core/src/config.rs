// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable engine configuration.
//!
//! Built once at startup from defaults, then the config file, then the
//! environment, and passed explicitly into component constructors. There
//! is no shared mutable configuration state anywhere in the engine.

use crate::risk::{builtin_signatures, HeuristicConfig, RiskClassifier, RuleError, SignatureRule};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default wall-clock bound for one command execution.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("cannot parse config file {path}: {source}")]
    Parse { path: String, source: toml::de::Error },
}

/// Top-level configuration value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub safety: SafetyConfig,
    pub provider: ProviderConfig,
}

/// Safety-related tunables for the classifier and runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Wall-clock timeout per command, in seconds.
    pub timeout_secs: u64,
    /// Approve dangerous commands without prompting. Off by default.
    pub auto_confirm: bool,
    /// When set, replaces the built-in danger signature table.
    pub dangerous_patterns: Option<Vec<SignatureRule>>,
    pub heuristics: HeuristicConfig,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auto_confirm: false,
            dangerous_patterns: None,
            heuristics: HeuristicConfig::default(),
        }
    }
}

/// Which suggestion provider to construct. A closed set; selection happens
/// once at startup, never by string comparison inside the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Openai,
    Ollama,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model: Option<String>,
    pub host: Option<String>,
}

impl ProviderConfig {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(match self.kind {
            ProviderKind::Openai => "gpt-4",
            ProviderKind::Ollama => "deepseek-r1:8b",
        })
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(match self.kind {
            ProviderKind::Openai => "https://api.openai.com",
            ProviderKind::Ollama => "http://localhost:11434",
        })
    }
}

impl Config {
    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: display.clone(), source })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path: display, source })
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Env override logic with an injectable lookup, for tests.
    pub fn apply_env_from(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(kind) = get("SHAI_PROVIDER") {
            match kind.to_lowercase().as_str() {
                "openai" => self.provider.kind = ProviderKind::Openai,
                "ollama" => self.provider.kind = ProviderKind::Ollama,
                // Unknown names keep the configured provider.
                _ => {}
            }
        }
        if let Some(secs) = get("SHAI_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.safety.timeout_secs = secs;
        }
        match self.provider.kind {
            ProviderKind::Openai => {
                if let Some(model) = get("OPENAI_MODEL") {
                    self.provider.model = Some(model);
                }
            }
            ProviderKind::Ollama => {
                if let Some(host) = get("OLLAMA_HOST") {
                    self.provider.host = Some(host);
                }
                if let Some(model) = get("OLLAMA_MODEL") {
                    self.provider.model = Some(model);
                }
            }
        }
    }

    /// The effective signature table: the file override, or the built-ins.
    pub fn signatures(&self) -> Vec<SignatureRule> {
        self.safety
            .dangerous_patterns
            .clone()
            .unwrap_or_else(builtin_signatures)
    }

    /// Compile the classifier for this configuration.
    pub fn classifier(&self) -> Result<RiskClassifier, RuleError> {
        RiskClassifier::new(&self.signatures(), self.safety.heuristics.clone())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
