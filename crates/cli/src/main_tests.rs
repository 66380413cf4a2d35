// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn flags(timeout: Option<u64>) -> ExecFlags {
    ExecFlags {
        yes: false,
        dry_run: false,
        no_repair: false,
        timeout,
        output: OutputFormat::Text,
    }
}

#[test]
fn timeout_flag_overrides_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[safety]\ntimeout_secs = 7\n").unwrap();

    let config = resolve_config(Some(&path), &flags(None)).unwrap();
    assert_eq!(config.safety.timeout_secs, 7);

    let config = resolve_config(Some(&path), &flags(Some(3))).unwrap();
    assert_eq!(config.safety.timeout_secs, 3);
}

#[test]
fn explicit_config_path_must_exist() {
    let err = resolve_config(Some(Path::new("/nonexistent/shai.toml")), &flags(None)).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/shai.toml"));
}
