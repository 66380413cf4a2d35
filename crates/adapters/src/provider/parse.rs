// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient parsing of model replies into [`Suggestion`] values.
//!
//! Models wrap JSON in markdown fences and prose often enough that strict
//! parsing would reject usable answers. We strip fences, locate the first
//! balanced JSON object, and only then hand off to serde.

use super::ProviderError;
use shai_core::Suggestion;

/// Parse a raw model reply into a [`Suggestion`].
pub fn parse_suggestion(raw: &str) -> Result<Suggestion, ProviderError> {
    let cleaned = strip_code_fences(raw);
    let json = extract_json_object(cleaned).ok_or_else(|| {
        ProviderError::MalformedResponse("no JSON object in model reply".to_string())
    })?;
    serde_json::from_str(json).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

/// Remove a surrounding markdown code fence, if any.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the fence line (which may carry a language tag).
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Locate the first balanced `{...}` object, honoring JSON string
/// escaping so braces inside values don't end the scan early.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
