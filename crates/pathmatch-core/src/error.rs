//! Core error types for pathmatch.
//!
//! [`PathMatchError`] covers the three failure classes of the engine: a pattern
//! that cannot be compiled, substitution data that cannot produce a path, and
//! configuration problems. A pathname that simply does not match a pattern is
//! not an error; the match functions report it as `Ok(None)`.

use thiserror::Error;

/// The primary error type for pathmatch.
///
/// Every failure is deterministic and input-dependent, so none of the variants
/// are retryable.
#[derive(Error, Debug)]
pub enum PathMatchError {
    // ── Patterns ─────────────────────────────────────────────────────

    /// The pattern string has malformed syntax or compiles to an invalid regex.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    // ── Path generation ──────────────────────────────────────────────

    /// A parameter declared by the pattern has no value (or an empty list).
    #[error("Missing parameter: expected \"{name}\" to be defined")]
    ParameterMissing {
        /// The declared parameter name.
        name: String,
    },

    /// A supplied value violates the parameter's constraint.
    #[error("Invalid parameter \"{name}\": {reason}")]
    ParameterInvalid {
        /// The declared parameter name.
        name: String,
        /// What was wrong with the value.
        reason: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PathMatchError {
    /// Creates a [`PathMatchError::ParameterMissing`] for the given name.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::ParameterMissing { name: name.into() }
    }

    /// Creates a [`PathMatchError::ParameterInvalid`] for the given name.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParameterInvalid {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns a short, stable identifier for the error class.
    ///
    /// - `InvalidPattern` -> `"invalid_pattern"`
    /// - `ParameterMissing` -> `"parameter_missing"`
    /// - `ParameterInvalid` -> `"parameter_invalid"`
    /// - `ConfigurationError` -> `"configuration"`
    /// - `Io` -> `"io"`
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidPattern(_) => "invalid_pattern",
            Self::ParameterMissing { .. } => "parameter_missing",
            Self::ParameterInvalid { .. } => "parameter_invalid",
            Self::ConfigurationError(_) => "configuration",
            Self::Io(_) => "io",
        }
    }

    /// Returns `true` for errors raised while substituting generator parameters.
    pub const fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::ParameterMissing { .. } | Self::ParameterInvalid { .. }
        )
    }
}

/// A convenience type alias for `Result<T, PathMatchError>`.
pub type PathMatchResult<T> = Result<T, PathMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PathMatchError::InvalidPattern("x".into()).code(),
            "invalid_pattern"
        );
        assert_eq!(PathMatchError::missing("id").code(), "parameter_missing");
        assert_eq!(
            PathMatchError::invalid("id", "bad").code(),
            "parameter_invalid"
        );
        assert_eq!(
            PathMatchError::ConfigurationError("x".into()).code(),
            "configuration"
        );
    }

    #[test]
    fn test_parameter_missing_display() {
        let err = PathMatchError::missing("id");
        assert_eq!(
            err.to_string(),
            "Missing parameter: expected \"id\" to be defined"
        );
    }

    #[test]
    fn test_parameter_invalid_display() {
        let err = PathMatchError::invalid("id", "expected digits");
        assert_eq!(err.to_string(), "Invalid parameter \"id\": expected digits");
    }

    #[test]
    fn test_is_parameter_error() {
        assert!(PathMatchError::missing("a").is_parameter_error());
        assert!(PathMatchError::invalid("a", "b").is_parameter_error());
        assert!(!PathMatchError::InvalidPattern("a".into()).is_parameter_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PathMatchError = io_err.into();
        assert_eq!(err.code(), "io");
        assert!(err.to_string().contains("file missing"));
    }
}
