//! Match options and the inputs accepted by the match API.

use serde::{Deserialize, Serialize};

use pathmatch_pattern::CompileOptions;

/// Flags controlling how a pattern matches a pathname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Only accept a match that covers the whole pathname.
    pub exact: bool,
    /// Make a trailing slash on the pattern significant.
    pub strict: bool,
    /// Match case-sensitively.
    pub sensitive: bool,
}

impl From<MatchOptions> for CompileOptions {
    fn from(options: MatchOptions) -> Self {
        Self::new(options.exact, options.strict, options.sensitive)
    }
}

/// The option record a route declares: an optional pattern plus match flags.
///
/// A route without a `path` does not match on its own; it inherits the match
/// of its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// The pattern to match, if any.
    pub path: Option<String>,
    /// Only accept a match that covers the whole pathname.
    pub exact: bool,
    /// Make a trailing slash on the pattern significant.
    pub strict: bool,
    /// Match case-sensitively.
    pub sensitive: bool,
}

impl PathOptions {
    /// Creates options for `path` with every flag off.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates options without a path.
    pub fn pathless() -> Self {
        Self::default()
    }

    /// Sets the `exact` flag.
    #[must_use]
    pub const fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Sets the `strict` flag.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the `sensitive` flag.
    #[must_use]
    pub const fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    /// Copies the three flags from `options`.
    #[must_use]
    pub const fn with_options(mut self, options: MatchOptions) -> Self {
        self.exact = options.exact;
        self.strict = options.strict;
        self.sensitive = options.sensitive;
        self
    }

    /// Returns the three flags.
    pub const fn match_options(&self) -> MatchOptions {
        MatchOptions {
            exact: self.exact,
            strict: self.strict,
            sensitive: self.sensitive,
        }
    }

    /// Returns the compiler options these flags map to (`end = exact`).
    pub const fn compile_options(&self) -> CompileOptions {
        CompileOptions::new(self.exact, self.strict, self.sensitive)
    }
}

/// What a caller may pass to the match API.
///
/// A bare pattern string is shorthand for `PathOptions::new(pattern)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchInput {
    /// A pattern with default options.
    Pattern(String),
    /// A full option record.
    Options(PathOptions),
}

impl From<MatchInput> for PathOptions {
    fn from(input: MatchInput) -> Self {
        match input {
            MatchInput::Pattern(path) => Self::new(path),
            MatchInput::Options(options) => options,
        }
    }
}

impl From<&str> for MatchInput {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for MatchInput {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<&String> for MatchInput {
    fn from(pattern: &String) -> Self {
        Self::Pattern(pattern.clone())
    }
}

impl From<PathOptions> for MatchInput {
    fn from(options: PathOptions) -> Self {
        Self::Options(options)
    }
}

impl From<&PathOptions> for MatchInput {
    fn from(options: &PathOptions) -> Self {
        Self::Options(options.clone())
    }
}
