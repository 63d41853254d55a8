//! Settings loading from a configuration file and the environment.
//!
//! Values are layered: defaults, then a TOML or JSON file, then the
//! `PATHMATCH_*` environment variables. Keys missing from a file keep their
//! default values.
//!
//! | Env Var | Setting |
//! |---|---|
//! | `PATHMATCH_DEBUG` | `debug` |
//! | `PATHMATCH_LOG_LEVEL` | `log_level` |
//! | `PATHMATCH_PATTERN_CACHE_LIMIT` | `pattern_cache_limit` |
//! | `PATHMATCH_TEMPLATE_CACHE_LIMIT` | `template_cache_limit` |
//!
//! ```rust,no_run
//! use pathmatch_core::settings_loader;
//!
//! let settings = settings_loader::from_file_with_env("pathmatch.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::PathMatchError;
use crate::settings::Settings;

/// Parses settings from TOML.
///
/// # Errors
///
/// Returns [`PathMatchError::ConfigurationError`] if the TOML is malformed or
/// a value has the wrong type.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, PathMatchError> {
    toml::from_str(toml_str)
        .map_err(|e| PathMatchError::ConfigurationError(format!("Invalid TOML settings: {e}")))
}

/// Parses settings from JSON.
///
/// # Errors
///
/// Returns [`PathMatchError::ConfigurationError`] if the JSON is malformed or
/// a value has the wrong type.
pub fn from_json_str(json_str: &str) -> Result<Settings, PathMatchError> {
    serde_json::from_str(json_str)
        .map_err(|e| PathMatchError::ConfigurationError(format!("Invalid JSON settings: {e}")))
}

/// Loads settings from a file. `.json` files are read as JSON, anything else
/// as TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn from_file(path: impl AsRef<Path>) -> Result<Settings, PathMatchError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        PathMatchError::ConfigurationError(format!(
            "Failed to read settings file '{}': {e}",
            path.display()
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_str(&contents)
    } else {
        from_toml_str(&contents)
    }
}

/// Loads settings from a file and then applies environment overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn from_file_with_env(path: impl AsRef<Path>) -> Result<Settings, PathMatchError> {
    let mut settings = from_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Default settings with environment overrides applied.
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies the `PATHMATCH_*` environment variables to `settings`.
///
/// `PATHMATCH_DEBUG` is true for "true", "1" or "yes". Cache limits that do
/// not parse as an unsigned integer are ignored with a warning.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("PATHMATCH_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("PATHMATCH_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(limit) = env_limit("PATHMATCH_PATTERN_CACHE_LIMIT") {
        settings.pattern_cache_limit = limit;
    }

    if let Some(limit) = env_limit("PATHMATCH_TEMPLATE_CACHE_LIMIT") {
        settings.template_cache_limit = limit;
    }
}

fn env_limit(var: &str) -> Option<usize> {
    let val = std::env::var(var).ok()?;
    match val.trim().parse::<usize>() {
        Ok(limit) => Some(limit),
        Err(_) => {
            tracing::warn!(var, value = %val, "ignoring non-numeric cache limit");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_overrides_only_given_keys() {
        let settings = from_toml_str("debug = true\npattern_cache_limit = 50").unwrap();
        assert!(settings.debug);
        assert_eq!(settings.pattern_cache_limit, 50);
        assert_eq!(settings.template_cache_limit, 10_000);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_toml_extra_table() {
        let settings = from_toml_str("[extra]\nbasename = \"/app\"").unwrap();
        assert_eq!(settings.extra["basename"], "/app");
    }

    #[test]
    fn test_empty_inputs_are_defaults() {
        assert_eq!(from_toml_str("").unwrap(), Settings::default());
        assert_eq!(from_json_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_json_limits() {
        let json = r#"{"template_cache_limit": 7, "log_level": "warn"}"#;
        let settings = from_json_str(json).unwrap();
        assert_eq!(settings.template_cache_limit, 7);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.pattern_cache_limit, 10_000);
    }

    #[test]
    fn test_malformed_and_mistyped() {
        assert!(matches!(
            from_toml_str("[[broken"),
            Err(PathMatchError::ConfigurationError(_))
        ));
        assert!(from_toml_str("pattern_cache_limit = \"lots\"").is_err());
        assert!(from_json_str("{broken").is_err());
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("settings.JSON");
        std::fs::write(&json_path, r#"{"template_cache_limit": 3}"#).unwrap();
        let toml_path = dir.path().join("settings.conf");
        std::fs::write(&toml_path, "template_cache_limit = 4").unwrap();

        assert_eq!(from_file(&json_path).unwrap().template_cache_limit, 3);
        assert_eq!(from_file(&toml_path).unwrap().template_cache_limit, 4);
    }

    #[test]
    fn test_from_file_missing() {
        let result = from_file("/nonexistent/path/pathmatch.toml");
        assert!(matches!(result, Err(PathMatchError::ConfigurationError(_))));
    }

    // Each variable is touched by exactly one test so the tests can run in
    // parallel.

    #[test]
    fn test_env_debug() {
        let mut settings = Settings::default();
        std::env::set_var("PATHMATCH_DEBUG", "yes");
        apply_env_overrides(&mut settings);
        assert!(settings.debug);

        std::env::set_var("PATHMATCH_DEBUG", "off");
        apply_env_overrides(&mut settings);
        assert!(!settings.debug);
        std::env::remove_var("PATHMATCH_DEBUG");
    }

    #[test]
    fn test_env_log_level() {
        std::env::set_var("PATHMATCH_LOG_LEVEL", "trace");
        let settings = from_env();
        std::env::remove_var("PATHMATCH_LOG_LEVEL");
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_env_pattern_limit() {
        let mut settings = Settings::default();
        std::env::set_var("PATHMATCH_PATTERN_CACHE_LIMIT", "25");
        apply_env_overrides(&mut settings);
        std::env::remove_var("PATHMATCH_PATTERN_CACHE_LIMIT");
        assert_eq!(settings.pattern_cache_limit, 25);
    }

    #[test]
    fn test_env_invalid_limit_is_ignored() {
        let mut settings = Settings::default();
        std::env::set_var("PATHMATCH_TEMPLATE_CACHE_LIMIT", "not-a-number");
        apply_env_overrides(&mut settings);
        std::env::remove_var("PATHMATCH_TEMPLATE_CACHE_LIMIT");
        assert_eq!(settings.template_cache_limit, 10_000);
    }
}
