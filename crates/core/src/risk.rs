// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Danger classification over untrusted command text.
//!
//! The signature set is data, not control flow: rules are plain
//! `{ name, pattern }` pairs that can be overridden from the config file
//! and are compiled once at construction. Classification is deterministic;
//! the same text and rule set always produce the same verdict.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named danger signature: a case-insensitive regex known to correlate
/// with destructive or unsafe shell behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRule {
    /// Human-readable name, shown to the user in the verdict reason.
    pub name: String,
    /// Regex matched against the raw command text.
    pub pattern: String,
}

impl SignatureRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self { name: name.into(), pattern: pattern.into() }
    }
}

/// Rule table compilation errors.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid danger signature `{name}`: {source}")]
    InvalidPattern { name: String, source: regex::Error },
}

/// Structural heuristics applied independently of the signature table.
///
/// Each check can be disabled individually; the interpreter name list used
/// by the pipe check is configuration as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Flag commands whose first token is `sudo`.
    pub flag_sudo: bool,
    /// Flag a single (non-doubled) output redirection operator.
    pub flag_overwrite_redirect: bool,
    /// Flag a pipe feeding a shell interpreter.
    pub flag_pipe_to_shell: bool,
    /// Program names treated as shell interpreters by the pipe check.
    pub shell_interpreters: Vec<String>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            flag_sudo: true,
            flag_overwrite_redirect: true,
            flag_pipe_to_shell: true,
            shell_interpreters: vec!["bash".into(), "sh".into(), "zsh".into()],
        }
    }
}

/// Result of classifying one command. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub dangerous: bool,
    pub reasons: Vec<String>,
}

impl RiskVerdict {
    /// Verdict for a command with no matched risks.
    pub fn safe() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: String,
    regex: Regex,
}

/// Stateless classifier over a compiled rule table.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    rules: Vec<CompiledRule>,
    heuristics: HeuristicConfig,
}

impl RiskClassifier {
    /// Compile a rule table. Order is preserved; reasons are appended in
    /// rule order, then heuristic order.
    pub fn new(rules: &[SignatureRule], heuristics: HeuristicConfig) -> Result<Self, RuleError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| RuleError::InvalidPattern { name: rule.name.clone(), source })?;
            compiled.push(CompiledRule { name: rule.name.clone(), regex });
        }
        Ok(Self { rules: compiled, heuristics })
    }

    /// Classifier over the built-in signature table and default heuristics.
    pub fn with_builtin_rules() -> Result<Self, RuleError> {
        Self::new(&builtin_signatures(), HeuristicConfig::default())
    }

    /// Classify command text. Pure and deterministic for a given rule set.
    pub fn classify(&self, text: &str) -> RiskVerdict {
        let mut reasons = Vec::new();

        for rule in &self.rules {
            if rule.regex.is_match(text) {
                reasons.push(format!("Matches dangerous pattern: {}", rule.name));
            }
        }

        let h = &self.heuristics;
        if h.flag_sudo && text.split_whitespace().next() == Some("sudo") {
            reasons.push("Requires elevated privileges".to_string());
        }
        if h.flag_overwrite_redirect && text.contains('>') && !text.contains(">>") {
            reasons.push("May overwrite existing files".to_string());
        }
        if h.flag_pipe_to_shell && pipes_to_interpreter(text, &h.shell_interpreters) {
            reasons.push("Pipes to a shell interpreter - could execute arbitrary code".to_string());
        }

        RiskVerdict { dangerous: !reasons.is_empty(), reasons }
    }
}

/// True when a token after the first pipe names a shell interpreter
/// (basename comparison, so `/bin/sh` counts).
fn pipes_to_interpreter(text: &str, interpreters: &[String]) -> bool {
    let Some(idx) = text.find('|') else {
        return false;
    };
    text[idx + 1..].split_whitespace().any(|token| {
        let base = token.rsplit('/').next().unwrap_or(token);
        interpreters.iter().any(|name| name == base)
    })
}

/// The default danger signature table.
///
/// Kept as data so the config file can replace it without code changes.
pub fn builtin_signatures() -> Vec<SignatureRule> {
    vec![
        SignatureRule::new("rm -rf /", r"rm\s+-rf\s+/"),
        SignatureRule::new("rm -rf *", r"rm\s+-rf\s+\*"),
        SignatureRule::new("dd to a raw device", r"dd\s+if=.*of=/dev/"),
        SignatureRule::new("mkfs", r"mkfs"),
        SignatureRule::new("redirect to a raw device", r">\s*/dev/"),
        SignatureRule::new("chmod -R 777", r"chmod\s+-R\s+777"),
        SignatureRule::new("chown -R root", r"chown\s+-R\s+root"),
        SignatureRule::new("curl piped to bash", r"curl.*\|\s*bash"),
        SignatureRule::new("wget piped to sh", r"wget.*\|\s*sh"),
        SignatureRule::new("fork bomb", r":\(\)\s*\{.*\}"),
    ]
}

#[cfg(test)]
#[path = "risk_tests.rs"]
mod tests;
