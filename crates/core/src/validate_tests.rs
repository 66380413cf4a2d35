// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_command_is_rejected() {
    assert_eq!(validate(""), Err(ValidationError::EmptyCommand));
    assert_eq!(validate("   \t\n "), Err(ValidationError::EmptyCommand));
}

#[test]
fn empty_command_reason_text() {
    let err = validate("").unwrap_err();
    assert_eq!(err.to_string(), "empty command");
}

#[yare::parameterized(
    backtick            = { "echo `whoami`", "`" },
    command_subst       = { "echo $(rm -rf ~)", "$(" },
    parameter_subst     = { "echo ${IFS}cat${IFS}/etc/passwd", "${" },
)]
fn injection_markers_are_rejected(text: &str, marker: &str) {
    match validate(text) {
        Err(ValidationError::InjectionMarker { marker: m }) => assert_eq!(m, marker),
        other => panic!("expected injection rejection, got {other:?}"),
    }
}

#[test]
fn injection_reason_names_the_marker() {
    let err = validate("echo `id`").unwrap_err();
    assert_eq!(err.to_string(), "potential shell injection: contains `");
}

#[yare::parameterized(
    simple     = { "ls -la" },
    pipes      = { "ps aux | grep sshd" },
    redirects  = { "echo hi > out.txt" },
    quoting    = { "echo 'a $b c'" },
)]
fn ordinary_commands_are_accepted(text: &str) {
    assert_eq!(validate(text), Ok(()));
}

#[test]
fn is_total_over_garbage_input() {
    // Never panics, whatever the bytes look like.
    let long = "x".repeat(1 << 20);
    assert_eq!(validate(&long), Ok(()));

    let binary = "\u{0}\u{1}\u{fffd}ls\u{7f}";
    assert!(validate(binary).is_ok());

    let mixed = format!("{}$({}", long, long);
    assert!(validate(&mixed).is_err());
}
