//! Settings for the pathmatch engine.
//!
//! [`Settings`] holds the knobs an application sets once at startup: the bounds
//! of the compiled-pattern and compiled-template caches, and logging options.
//! Load it with [`settings_loader`](crate::settings_loader) or build it in code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The default maximum number of entries a compiled-pattern cache stores.
pub const DEFAULT_CACHE_LIMIT: usize = 10_000;

/// The complete set of engine settings.
///
/// # Examples
///
/// ```
/// use pathmatch_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.pattern_cache_limit, 10_000);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (selects human-readable log output).
    pub debug: bool,

    // ── Caches ───────────────────────────────────────────────────────

    /// Maximum number of compiled match patterns stored, across all option
    /// combinations. Patterns beyond the bound are compiled but not stored.
    pub pattern_cache_limit: usize,
    /// Maximum number of compiled generator templates stored.
    pub template_cache_limit: usize,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or filter directive (e.g. "info", "pathmatch=debug").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Application-specific values that pathmatch itself ignores.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            pattern_cache_limit: DEFAULT_CACHE_LIMIT,
            template_cache_limit: DEFAULT_CACHE_LIMIT,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Sets both cache limits.
    #[must_use]
    pub const fn with_cache_limit(mut self, limit: usize) -> Self {
        self.pattern_cache_limit = limit;
        self.template_cache_limit = limit;
        self
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
