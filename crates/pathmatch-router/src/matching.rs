//! The match engine.
//!
//! [`Matcher::match_path`] answers "does this pathname match this route, and
//! with what parameters". A miss is `Ok(None)`; only a pattern that cannot be
//! compiled is an error.

use serde::Serialize;
use tracing::trace;

use pathmatch_core::logging::match_span;
use pathmatch_core::{Params, PathMatchResult};

use crate::cache::{default_cache, PatternCache};
use crate::options::{MatchInput, PathOptions};

/// A successful match of a pathname against a pattern.
///
/// Serializes as `{"path", "url", "isExact", "params"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The pattern that matched.
    pub path: String,
    /// The matched prefix of the pathname.
    pub url: String,
    /// Whether the match covers the entire pathname.
    pub is_exact: bool,
    /// Captured parameter values, in declaration order. Optional parameters
    /// that did not participate in the match are absent.
    pub params: Params,
}

impl MatchResult {
    /// The match a router provides at the top of the route tree.
    ///
    /// ```
    /// use pathmatch_router::MatchResult;
    ///
    /// let root = MatchResult::root("/");
    /// assert_eq!(root.url, "/");
    /// assert!(root.is_exact);
    /// assert!(!MatchResult::root("/about").is_exact);
    /// ```
    pub fn root(pathname: &str) -> Self {
        Self {
            path: "/".to_string(),
            url: "/".to_string(),
            is_exact: pathname == "/",
            params: Params::new(),
        }
    }
}

/// Runs matches against a [`PatternCache`].
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'c> {
    cache: &'c PatternCache,
}

impl<'c> Matcher<'c> {
    /// Creates a matcher backed by `cache`.
    pub const fn new(cache: &'c PatternCache) -> Self {
        Self { cache }
    }

    /// Returns the cache this matcher compiles through.
    pub const fn cache(&self) -> &'c PatternCache {
        self.cache
    }

    /// Matches `pathname` against a pattern or option record.
    ///
    /// When the options carry no path, no matching happens and `parent` is
    /// returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError::InvalidPattern`](pathmatch_core::PathMatchError::InvalidPattern)
    /// if the pattern cannot be compiled.
    pub fn match_path(
        &self,
        pathname: &str,
        input: impl Into<MatchInput>,
        parent: Option<&MatchResult>,
    ) -> PathMatchResult<Option<MatchResult>> {
        let options = PathOptions::from(input.into());
        let Some(path) = options.path.as_deref() else {
            return Ok(parent.cloned());
        };

        let span = match_span(path);
        let _guard = span.enter();

        let compiled = self.cache.compile(path, options.compile_options())?;
        let Some(found) = compiled.recognizer().exec(pathname) else {
            trace!(pathname, "no match");
            return Ok(None);
        };

        let url = found.matched();
        let is_exact = pathname == url;
        if options.exact && !is_exact {
            trace!(pathname, url, "rejected inexact match");
            return Ok(None);
        }

        let mut params = Params::with_capacity(compiled.keys().len());
        for (key, value) in compiled.keys().iter().zip(found.values()) {
            if let Some(value) = value {
                params.insert(key.name.as_str(), *value);
            }
        }

        let url = if path == "/" && url.is_empty() { "/" } else { url };
        trace!(pathname, url, is_exact, %params, "matched");

        Ok(Some(MatchResult {
            path: path.to_string(),
            url: url.to_string(),
            is_exact,
            params,
        }))
    }
}

impl Default for Matcher<'static> {
    fn default() -> Self {
        Self::new(default_cache())
    }
}

/// Matches `pathname` using the process-wide [`default_cache`].
///
/// See [`Matcher::match_path`].
///
/// # Examples
///
/// ```
/// use pathmatch_router::{match_path, PathOptions};
///
/// let m = match_path("/posts/2024/hello", "/posts/:year/:slug", None)
///     .unwrap()
///     .unwrap();
/// assert_eq!(m.params.get("year"), Some("2024"));
/// assert!(m.is_exact);
///
/// let parent = m.clone();
/// let inherited = match_path("/anything", PathOptions::pathless(), Some(&parent)).unwrap();
/// assert_eq!(inherited, Some(parent));
/// ```
pub fn match_path(
    pathname: &str,
    input: impl Into<MatchInput>,
    parent: Option<&MatchResult>,
) -> PathMatchResult<Option<MatchResult>> {
    Matcher::default().match_path(pathname, input, parent)
}
