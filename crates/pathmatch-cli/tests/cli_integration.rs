//! Integration tests for the pathmatch CLI.
//!
//! Tests cover: the `match` and `generate` commands through the registry,
//! settings files, and the compiled binary's output and exit status.

use std::io::Write as _;
use std::process::Command;

use pathmatch_cli::{load_settings, settings_path, CommandRegistry};
use pathmatch_core::{PathMatchResult, Settings};

fn run(args: &[&str]) -> PathMatchResult<String> {
    let registry = CommandRegistry::with_builtin_commands();
    let argv: Vec<&str> = std::iter::once("pathmatch").chain(args.iter().copied()).collect();
    let matches = registry.build_cli().try_get_matches_from(argv).unwrap();
    let mut out = Vec::new();
    registry.execute(&matches, &Settings::default(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// ═════════════════════════════════════════════════════════════════════
// 1. match
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_match_prints_result() {
    let out = run(&["match", "/users/42", "/users/:id"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "path": "/users/:id",
            "url": "/users/42",
            "isExact": true,
            "params": {"id": "42"}
        })
    );
}

#[test]
fn test_match_exact_miss_prints_null() {
    let out = run(&["match", "/users/42/edit", "/users/:id", "--exact"]).unwrap();
    assert_eq!(out.trim(), "null");
}

#[test]
fn test_match_flags() {
    assert_eq!(run(&["match", "/About", "/about", "--sensitive"]).unwrap().trim(), "null");
    assert_eq!(run(&["match", "/about", "/about/", "--strict", "--exact"]).unwrap().trim(), "null");
    assert_ne!(run(&["match", "/About", "/about"]).unwrap().trim(), "null");
}

// ═════════════════════════════════════════════════════════════════════
// 2. generate
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_generate_prints_path() {
    assert_eq!(run(&["generate", "/users/:id", "id=7"]).unwrap(), "/users/7\n");
    assert_eq!(run(&["generate", "/"]).unwrap(), "/\n");
}

#[test]
fn test_generate_repeated_param() {
    let out = run(&["generate", "/docs/:path+", "path=guide", "path=intro"]).unwrap();
    assert_eq!(out, "/docs/guide/intro\n");
}

#[test]
fn test_generate_errors() {
    assert_eq!(run(&["generate", "/users/:id"]).unwrap_err().code(), "parameter_missing");
    assert_eq!(
        run(&["generate", r"/users/:id(\d+)", "id=x"]).unwrap_err().code(),
        "parameter_invalid"
    );
    assert_eq!(run(&["generate", "/users/:id", "id"]).unwrap_err().code(), "configuration");
}

// ═════════════════════════════════════════════════════════════════════
// 3. Settings
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_settings_file_from_command_line() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "pattern_cache_limit = 5\ntemplate_cache_limit = 6").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let registry = CommandRegistry::with_builtin_commands();
    let matches = registry
        .build_cli()
        .try_get_matches_from(["pathmatch", "--settings", &path, "generate", "/a"])
        .unwrap();
    let settings = load_settings(settings_path(&matches)).unwrap();
    assert_eq!(settings.pattern_cache_limit, 5);
    assert_eq!(settings.template_cache_limit, 6);
}

#[test]
fn test_settings_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"debug": true, "log_level": "debug"}}"#).unwrap();
    let settings = load_settings(Some(file.path())).unwrap();
    assert!(settings.debug);
    assert_eq!(settings.log_level, "debug");
}

// ═════════════════════════════════════════════════════════════════════
// 4. Binary
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_binary_match_and_exit_status() {
    let output = Command::new(env!("CARGO_BIN_EXE_pathmatch"))
        .args(["match", "/posts/9", "/posts/:id"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["params"]["id"], "9");

    let output = Command::new(env!("CARGO_BIN_EXE_pathmatch"))
        .args(["generate", "/posts/:id"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing parameter"));
}
